use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Scatter colours
// ---------------------------------------------------------------------------

/// Point colour for a non-negative correlation.
pub const POSITIVE_BLUE: Color32 = Color32::from_rgb(56, 98, 204);
/// Point colour for a negative correlation.
pub const NEGATIVE_RED: Color32 = Color32::from_rgb(204, 62, 54);
/// Trend-line colour, neutral regardless of sign.
pub const TREND_GRAY: Color32 = Color32::from_rgb(128, 128, 128);

/// Scatter point colour keyed by correlation sign.
pub fn sign_color(r: f64) -> Color32 {
    if r < 0.0 {
        NEGATIVE_RED
    } else {
        POSITIVE_BLUE
    }
}

// ---------------------------------------------------------------------------
// Diverging heatmap colormap
// ---------------------------------------------------------------------------

/// Map a correlation in [−1, 1] onto a diverging blue–white–red ramp.
///
/// Hue is fixed by sign; saturation grows and lightness falls with |r|, so
/// zero sits at near-white and ±1 at a fully saturated endpoint.
pub fn correlation_color(r: f64) -> Color32 {
    let r = r.clamp(-1.0, 1.0);
    let t = r.abs() as f32;
    let hue = if r < 0.0 { 222.0 } else { 6.0 };
    let hsl = Hsl::new(hue, 0.25 + 0.6 * t, 0.96 - 0.41 * t);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Annotation colour that stays readable on top of [`correlation_color`].
pub fn annotation_color(r: f64) -> Color32 {
    if r.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::from_gray(40)
    }
}
