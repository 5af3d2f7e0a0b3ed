//! Writes a synthetic fitness-measurement CSV so the dashboard can be tried
//! without the official export. Output is deterministic (fixed seed).

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Occasionally replace a measurement with a blank or an unparseable marker,
/// the way the real export records failed measurements.
fn cell(rng: &mut SimpleRng, value: String) -> String {
    let roll = rng.next_f64();
    if roll < 0.03 {
        String::new()
    } else if roll < 0.05 {
        "측정불가".to_string()
    } else {
        value
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "fitness data.xlsx - KS_NFA_FTNESS_MESURE_ITEM_MESUR.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "측정일자",
        "성별",
        "측정연령수",
        "신장",
        "체중",
        "체지방율",
        "허리둘레",
        "이완기혈압_최저",
        "수축기혈압_최고",
        "악력_좌",
        "악력_우",
        "윗몸말아올리기",
        "제자리 멀리뛰기",
        "BMI",
        "상대악력",
        "허리둘레-신장비",
        "반복옆뛰기",
    ])?;

    let n_rows = 400;
    for i in 0..n_rows {
        let sex = if rng.next_f64() < 0.5 { "M" } else { "F" };
        let age = 20 + (rng.next_f64() * 40.0) as u32;

        let height = rng.gauss(170.0, 8.0);
        let weight = 0.9 * (height - 100.0) + rng.gauss(0.0, 7.0);
        let bmi = weight / (height / 100.0_f64).powi(2);
        let body_fat = (0.9 * bmi + rng.gauss(5.0, 3.0)).clamp(4.0, 45.0);
        let waist = 45.0 + 1.3 * body_fat + rng.gauss(0.0, 3.0);
        let dbp = 60.0 + 0.3 * body_fat + rng.gauss(0.0, 6.0);
        let sbp = 100.0 + 0.5 * body_fat + rng.gauss(0.0, 8.0);
        let grip_left = (48.0 - 0.5 * body_fat + rng.gauss(0.0, 4.0)).max(5.0);
        let grip_right = (grip_left + rng.gauss(1.0, 2.0)).max(5.0);
        let situps = (55.0 - 0.8 * body_fat + rng.gauss(0.0, 6.0)).max(0.0);
        let long_jump = (230.0 - 2.2 * body_fat + rng.gauss(0.0, 12.0)).max(50.0);
        let relative_grip = grip_right / weight * 100.0;
        let waist_height_ratio = waist / height;
        let side_steps = (50.0 - 0.6 * body_fat + rng.gauss(0.0, 5.0)).max(0.0);

        let date = format!("2024-{:02}-{:02}", 1 + i % 12, 1 + i % 28);
        writer.write_record([
            date,
            sex.to_string(),
            age.to_string(),
            cell(&mut rng, format!("{height:.1}")),
            cell(&mut rng, format!("{weight:.1}")),
            cell(&mut rng, format!("{body_fat:.1}")),
            cell(&mut rng, format!("{waist:.1}")),
            cell(&mut rng, format!("{dbp:.1}")),
            cell(&mut rng, format!("{sbp:.1}")),
            cell(&mut rng, format!("{grip_left:.1}")),
            cell(&mut rng, format!("{grip_right:.1}")),
            cell(&mut rng, format!("{situps:.0}")),
            cell(&mut rng, format!("{long_jump:.1}")),
            cell(&mut rng, format!("{bmi:.2}")),
            cell(&mut rng, format!("{relative_grip:.2}")),
            cell(&mut rng, format!("{waist_height_ratio:.3}")),
            cell(&mut rng, format!("{side_steps:.0}")),
        ])?;
    }

    writer.flush().context("flushing output CSV")?;
    println!("Wrote {n_rows} measurement rows to {output_path}");
    Ok(())
}
