use thiserror::Error;

use crate::data::model::NumericTable;

/// How many top-ranked features get their own scatter plot.
pub const TOP_K: usize = 3;

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// Everything the presenter needs: the full matrix for the heatmap plus the
/// target ranking for the tables and scatter plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Feature names indexing both axes of `matrix`.
    pub features: Vec<String>,
    /// Symmetric Pearson correlation matrix.
    pub matrix: Vec<Vec<f64>>,
    /// `(feature, signed r with the target)`, `|r|` descending, target excluded.
    pub ranked: Vec<(String, f64)>,
    /// First [`TOP_K`] entries of `ranked`.
    pub top: Vec<(String, f64)>,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("missing `{0}` column")]
    MissingTarget(String),
}

// ---------------------------------------------------------------------------
// Pearson correlation
// ---------------------------------------------------------------------------

/// Pearson product-moment correlation of two equal-length series.
/// Degenerate input (empty, or zero variance on either side) yields 0.0.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let mut num = 0.0;
    let mut den_x = 0.0;
    let mut den_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }
    let den = (den_x * den_y).sqrt();
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Least-squares fit `y = slope * x + intercept`, for the scatter trend line.
/// A degenerate x (zero variance) gives a flat line through the mean of y.
pub fn linear_fit(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let mut num = 0.0;
    let mut den = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        num += (xi - mean_x) * (yi - mean_y);
        den += (xi - mean_x) * (xi - mean_x);
    }
    if den == 0.0 {
        (0.0, mean_y)
    } else {
        let slope = num / den;
        (slope, mean_y - slope * mean_x)
    }
}

/// Full symmetric correlation matrix; each pair is computed once and
/// mirrored, so symmetry holds bit-exact.
pub fn correlation_matrix(table: &NumericTable) -> Vec<Vec<f64>> {
    let n = table.columns.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(&table.values[i], &table.values[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}

// ---------------------------------------------------------------------------
// Target ranking
// ---------------------------------------------------------------------------

/// Correlate every feature against `target` and rank by absolute value.
pub fn analyze(table: &NumericTable, target: &str) -> Result<Analysis, AnalysisError> {
    let target_idx = table
        .columns
        .iter()
        .position(|c| c == target)
        .ok_or_else(|| AnalysisError::MissingTarget(target.to_string()))?;

    let matrix = correlation_matrix(table);

    let mut ranked: Vec<(String, f64)> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target_idx)
        .map(|(i, name)| (name.clone(), matrix[target_idx][i]))
        .collect();
    // Stable sort: equal |r| keeps column registration order, so reruns agree.
    ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));

    let top = ranked.iter().take(TOP_K).cloned().collect();

    Ok(Analysis {
        features: table.columns.clone(),
        matrix,
        ranked,
        top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[(&str, &[f64])]) -> NumericTable {
        NumericTable {
            columns: columns.iter().map(|(n, _)| n.to_string()).collect(),
            values: columns.iter().map(|(_, v)| v.to_vec()).collect(),
        }
    }

    #[test]
    fn identical_series_correlate_to_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_series_correlate_to_minus_one() {
        let x = [10.0, 20.0, 30.0, 40.0];
        let y = [40.0, 30.0, 20.0, 10.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_yields_zero() {
        let x = [3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(pearson(&x, &y), 0.0);
        assert_eq!(pearson(&[], &[]), 0.0);
    }

    #[test]
    fn correlation_is_bounded() {
        let x = [1.0, 3.0, 2.0, 5.0, 4.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        let r = pearson(&x, &y);
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn positive_scaling_keeps_correlation_sign_flip_on_negative() {
        let x = [1.0, 2.0, 4.0, 8.0];
        let y = [3.0, 1.0, 5.0, 7.0];
        let r = pearson(&x, &y);

        let scaled: Vec<f64> = x.iter().map(|v| v * 2.5).collect();
        assert!((pearson(&scaled, &y) - r).abs() < 1e-12);

        let negated: Vec<f64> = x.iter().map(|v| v * -1.0).collect();
        assert!((pearson(&negated, &y) + r).abs() < 1e-12);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let t = table(&[
            ("a", &[1.0, 2.0, 3.0, 4.0]),
            ("b", &[2.0, 1.0, 4.0, 3.0]),
            ("c", &[5.0, 5.0, 1.0, 2.0]),
        ]);
        let m = correlation_matrix(&t);

        for i in 0..3 {
            assert_eq!(m[i][i], 1.0);
            for j in 0..3 {
                // Mirrored assignment makes this hold bit-exact.
                assert_eq!(m[i][j], m[j][i]);
                assert!((-1.0..=1.0).contains(&m[i][j]));
            }
        }
    }

    #[test]
    fn ranking_excludes_target_and_sorts_by_magnitude() {
        let t = table(&[
            ("체지방율", &[10.0, 20.0, 30.0, 40.0]),
            ("BMI", &[15.0, 25.0, 35.0, 45.0]),
            ("악력_우", &[40.0, 30.0, 20.0, 10.0]),
            ("noise", &[1.0, 9.0, 2.0, 8.0]),
        ]);
        let analysis = analyze(&t, "체지방율").unwrap();

        assert_eq!(analysis.ranked.len(), 3);
        assert!(analysis.ranked.iter().all(|(n, _)| n != "체지방율"));
        for pair in analysis.ranked.windows(2) {
            assert!(pair[0].1.abs() >= pair[1].1.abs());
        }

        // Signs survive the ranking.
        assert!((analysis.ranked[0].1 - 1.0).abs() < 1e-12 || (analysis.ranked[0].1 + 1.0).abs() < 1e-12);
    }

    #[test]
    fn top_k_is_clamped_to_available_features() {
        let t = table(&[
            ("체지방율", &[10.0, 20.0, 30.0]),
            ("BMI", &[15.0, 25.0, 35.0]),
        ]);
        let analysis = analyze(&t, "체지방율").unwrap();

        assert_eq!(analysis.top.len(), 1);
        assert_eq!(analysis.top[0].0, "BMI");
        assert!((analysis.top[0].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_target_is_an_error() {
        let t = table(&[("BMI", &[1.0, 2.0])]);
        let err = analyze(&t, "체지방율").unwrap_err();
        assert!(matches!(err, AnalysisError::MissingTarget(name) if name == "체지방율"));
    }

    #[test]
    fn tied_magnitudes_keep_registration_order() {
        // b = 10 - a, so |r(a, t)| == |r(b, t)| exactly.
        let a = [1.0, 4.0, 2.0, 6.0];
        let b: Vec<f64> = a.iter().map(|v| 10.0 - v).collect();
        let t = table(&[
            ("체지방율", &[2.0, 5.0, 1.0, 7.0]),
            ("a", &a),
            ("b", &b),
        ]);

        let first = analyze(&t, "체지방율").unwrap();
        let second = analyze(&t, "체지방율").unwrap();

        assert_eq!(first.ranked[0].1.abs(), first.ranked[1].1.abs());
        assert_eq!(first.ranked[0].0, "a");
        assert_eq!(first, second);
    }

    #[test]
    fn analysis_is_deterministic() {
        let t = table(&[
            ("체지방율", &[10.0, 22.0, 31.0, 44.0, 50.0]),
            ("신장", &[170.0, 168.0, 175.0, 160.0, 181.0]),
            ("체중", &[60.0, 72.0, 68.0, 80.0, 77.0]),
        ]);
        assert_eq!(analyze(&t, "체지방율").unwrap(), analyze(&t, "체지방율").unwrap());
    }

    #[test]
    fn flat_x_gives_flat_trend_through_mean() {
        let (slope, intercept) = linear_fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 6.0]);
        assert_eq!(slope, 0.0);
        assert!((intercept - 3.0).abs() < 1e-12);
    }

    #[test]
    fn linear_fit_recovers_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v - 1.0).collect();
        let (slope, intercept) = linear_fit(&x, &y);
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept + 1.0).abs() < 1e-12);
    }
}
