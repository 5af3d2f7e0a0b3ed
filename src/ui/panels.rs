use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::correlation::Analysis;
use crate::data::model::{NumericTable, RawTable};
use crate::data::preprocess::TARGET_COLUMN;
use crate::state::AppState;
use crate::ui::{heatmap, plot};

/// Rows shown in the raw and numeric preview tables.
const PREVIEW_ROWS: usize = 5;
/// Rows shown in the ranking table.
const RANKING_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: app name, reload, row counts, error mirror.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Fitness Correlation Dashboard");
        ui.separator();

        if ui.button("Reload").clicked() {
            state.reload();
        }

        if let Some(raw) = &state.raw {
            ui.separator();
            ui.label(format!("{} rows loaded", raw.len()));
        }

        if let Some(err) = &state.error {
            ui.separator();
            ui.label(RichText::new(err.to_string()).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Report blocks, rendered top to bottom
// ---------------------------------------------------------------------------

/// Render the whole report. Each block only appears when its stage produced
/// an artifact; the first gap is filled with the error banner instead.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            header_block(ui, state);

            let Some(raw) = &state.raw else {
                error_banner(ui, state);
                return;
            };
            raw_preview_block(ui, raw);

            let Some(numeric) = &state.numeric else {
                error_banner(ui, state);
                return;
            };
            numeric_block(ui, numeric);

            let Some(analysis) = &state.analysis else {
                error_banner(ui, state);
                return;
            };
            ranking_block(ui, analysis);
            heatmap_block(ui, analysis);
            scatter_block(ui, numeric, analysis);
        });
}

fn error_banner(ui: &mut Ui, state: &AppState) {
    if let Some(err) = &state.error {
        ui.add_space(8.0);
        ui.label(RichText::new(err.to_string()).color(Color32::RED).strong());
    }
}

fn header_block(ui: &mut Ui, state: &AppState) {
    ui.heading("운동 데이터 분석");
    ui.label(format!("Analyzing `{}`", state.source_path.display()));
    ui.separator();
}

fn raw_preview_block(ui: &mut Ui, raw: &RawTable) {
    ui.heading("Raw data preview");
    ui.label(format!("Total rows: {}", raw.len()));
    ui.push_id("raw_preview", |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            string_table(ui, &raw.headers, raw.head(PREVIEW_ROWS));
        });
    });
    ui.separator();
}

fn numeric_block(ui: &mut Ui, numeric: &NumericTable) {
    ui.heading("Preprocessing");
    ui.label(format!(
        "Numeric rows available after preprocessing: {}",
        numeric.n_rows()
    ));
    let rows: Vec<Vec<String>> = numeric
        .head(PREVIEW_ROWS)
        .iter()
        .map(|row| row.iter().map(|v| format!("{v:.2}")).collect())
        .collect();
    ui.push_id("numeric_preview", |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            string_table(ui, &numeric.columns, &rows);
        });
    });
    ui.separator();
}

fn ranking_block(ui: &mut Ui, analysis: &Analysis) {
    ui.heading(format!("Correlation with {TARGET_COLUMN}"));
    ui.push_id("ranking", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(180.0))
            .column(Column::auto().at_least(90.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("feature");
                });
                header.col(|ui| {
                    ui.strong("|r|");
                });
            })
            .body(|mut body| {
                for (name, r) in analysis.ranked.iter().take(RANKING_ROWS) {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(name);
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.4}", r.abs()));
                        });
                    });
                }
            });
    });

    let top_names: Vec<&str> = analysis.top.iter().map(|(n, _)| n.as_str()).collect();
    ui.add_space(6.0);
    ui.label(
        RichText::new(format!(
            "Strongest correlations with {TARGET_COLUMN} (by absolute value): {}",
            top_names.join(", ")
        ))
        .color(Color32::DARK_GREEN)
        .strong(),
    );
    ui.separator();
}

fn heatmap_block(ui: &mut Ui, analysis: &Analysis) {
    ui.heading("Correlation heatmap");
    heatmap::correlation_heatmap(ui, analysis);
    ui.separator();
}

fn scatter_block(ui: &mut Ui, numeric: &NumericTable, analysis: &Analysis) {
    ui.heading(format!("{TARGET_COLUMN} vs. top correlated features"));
    for (rank, (feature, r)) in analysis.top.iter().enumerate() {
        plot::scatter_with_trend(ui, numeric, feature, *r, rank);
        ui.add_space(12.0);
    }
}

// ---------------------------------------------------------------------------
// Shared table widget
// ---------------------------------------------------------------------------

fn string_table(ui: &mut Ui, headers: &[String], rows: &[Vec<String>]) {
    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(60.0), headers.len())
        .header(20.0, |mut header| {
            for name in headers {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(18.0, |mut table_row| {
                    for cell in row {
                        table_row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}
