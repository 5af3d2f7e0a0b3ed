use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::analysis::correlation::linear_fit;
use crate::color;
use crate::data::model::NumericTable;
use crate::data::preprocess::TARGET_COLUMN;

/// Scatter canvas size, 8:6 aspect.
const PLOT_SIZE: [f32; 2] = [480.0, 360.0];

// ---------------------------------------------------------------------------
// Scatter with trend line
// ---------------------------------------------------------------------------

/// One scatter of `feature` (x) against the target (y) with a least-squares
/// trend line. Point colour follows the correlation sign.
pub fn scatter_with_trend(ui: &mut Ui, table: &NumericTable, feature: &str, r: f64, rank: usize) {
    let (Some(x), Some(y)) = (table.column(feature), table.column(TARGET_COLUMN)) else {
        return;
    };
    if x.is_empty() {
        return;
    }

    ui.strong(format!("{TARGET_COLUMN} vs. {feature} (r = {r:+.2})"));

    let points: PlotPoints = x.iter().zip(y.iter()).map(|(&xi, &yi)| [xi, yi]).collect();
    let scatter = Points::new(points)
        .color(color::sign_color(r))
        .radius(2.5)
        .name(feature);

    let (slope, intercept) = linear_fit(x, y);
    let (x_min, x_max) = bounds(x);
    let trend: PlotPoints = vec![
        [x_min, slope * x_min + intercept],
        [x_max, slope * x_max + intercept],
    ]
    .into();
    let trend_line = Line::new(trend)
        .color(color::TREND_GRAY)
        .width(2.0)
        .name("trend");

    Plot::new(("scatter", rank))
        .width(PLOT_SIZE[0])
        .height(PLOT_SIZE[1])
        .x_axis_label(feature)
        .y_axis_label(TARGET_COLUMN)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(scatter);
            plot_ui.line(trend_line);
        });
}

fn bounds(xs: &[f64]) -> (f64, f64) {
    let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}
