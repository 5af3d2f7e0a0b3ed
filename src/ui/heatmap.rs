use eframe::egui::epaint::TextShape;
use eframe::egui::{
    Align2, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};

use crate::analysis::correlation::Analysis;
use crate::color::{annotation_color, correlation_color};

/// Heatmap canvas size, 12:10 aspect.
const CANVAS: Vec2 = Vec2::new(720.0, 600.0);
const LEFT_MARGIN: f32 = 110.0;
const BOTTOM_MARGIN: f32 = 96.0;
const TOP_MARGIN: f32 = 10.0;
const COLORBAR_WIDTH: f32 = 18.0;
const COLORBAR_GAP: f32 = 24.0;
const RIGHT_MARGIN: f32 = 96.0;

// ---------------------------------------------------------------------------
// Annotated correlation grid
// ---------------------------------------------------------------------------

/// Draw the full correlation matrix as an annotated cell grid with axis
/// labels and a vertical color-bar.
pub fn correlation_heatmap(ui: &mut Ui, analysis: &Analysis) {
    let n = analysis.features.len();
    if n == 0 {
        return;
    }

    let (response, painter) = ui.allocate_painter(CANVAS, Sense::hover());
    let canvas = response.rect;
    let text_color = ui.visuals().text_color();

    let grid = Rect::from_min_max(
        Pos2::new(canvas.left() + LEFT_MARGIN, canvas.top() + TOP_MARGIN),
        Pos2::new(canvas.right() - RIGHT_MARGIN, canvas.bottom() - BOTTOM_MARGIN),
    );
    let cell = Vec2::new(grid.width() / n as f32, grid.height() / n as f32);
    let annotation_font = FontId::proportional((cell.y * 0.32).clamp(8.0, 13.0));
    let label_font = FontId::proportional(12.0);

    for (i, row_name) in analysis.features.iter().enumerate() {
        let y = grid.top() + i as f32 * cell.y;

        // Row label, right-aligned against the grid edge.
        painter.text(
            Pos2::new(grid.left() - 6.0, y + cell.y / 2.0),
            Align2::RIGHT_CENTER,
            row_name,
            label_font.clone(),
            text_color,
        );

        for j in 0..n {
            let r = analysis.matrix[i][j];
            let cell_rect =
                Rect::from_min_size(Pos2::new(grid.left() + j as f32 * cell.x, y), cell);
            painter.rect_filled(cell_rect.shrink(0.5), 0.0, correlation_color(r));
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                format!("{r:.2}"),
                annotation_font.clone(),
                annotation_color(r),
            );
        }
    }

    // Column labels, angled so long names stay legible under narrow cells.
    for (j, col_name) in analysis.features.iter().enumerate() {
        let galley = painter.layout_no_wrap(col_name.clone(), label_font.clone(), text_color);
        let pos = Pos2::new(grid.left() + (j as f32 + 0.4) * cell.x, grid.bottom() + 6.0);
        painter.add(TextShape::new(pos, galley, text_color).with_angle(std::f32::consts::FRAC_PI_4));
    }

    color_bar(ui, &painter, grid);
}

// ---------------------------------------------------------------------------
// Color-bar
// ---------------------------------------------------------------------------

/// Vertical gradient strip next to the grid: +1 at the top, −1 at the bottom.
fn color_bar(ui: &Ui, painter: &Painter, grid: Rect) {
    let weak = ui.visuals().weak_text_color();
    let text_color = ui.visuals().text_color();
    let bar = Rect::from_min_max(
        Pos2::new(grid.right() + COLORBAR_GAP, grid.top()),
        Pos2::new(grid.right() + COLORBAR_GAP + COLORBAR_WIDTH, grid.bottom()),
    );

    let steps = 64;
    let step_h = bar.height() / steps as f32;
    for k in 0..steps {
        let r = 1.0 - 2.0 * (k as f64 + 0.5) / steps as f64;
        let slice = Rect::from_min_size(
            Pos2::new(bar.left(), bar.top() + k as f32 * step_h),
            Vec2::new(bar.width(), step_h + 0.5),
        );
        painter.rect_filled(slice, 0.0, correlation_color(r));
    }
    painter.rect_stroke(bar, 0.0, Stroke::new(1.0, weak), StrokeKind::Outside);

    let tick_font = FontId::proportional(11.0);
    for tick in [-1.0f64, -0.5, 0.0, 0.5, 1.0] {
        let y = bar.top() + (1.0 - (tick + 1.0) / 2.0) as f32 * bar.height();
        painter.line_segment(
            [Pos2::new(bar.right(), y), Pos2::new(bar.right() + 3.0, y)],
            Stroke::new(1.0, weak),
        );
        painter.text(
            Pos2::new(bar.right() + 6.0, y),
            Align2::LEFT_CENTER,
            format!("{tick:.1}"),
            tick_font.clone(),
            text_color,
        );
    }

    // Axis label running along the bar.
    let galley =
        painter.layout_no_wrap("correlation coefficient".to_owned(), tick_font, text_color);
    let pos = Pos2::new(
        bar.right() + 40.0,
        bar.center().y + galley.size().x / 2.0,
    );
    painter.add(TextShape::new(pos, galley, text_color).with_angle(-std::f32::consts::FRAC_PI_2));
}
