use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FitCorrApp {
    pub state: AppState,
}

impl FitCorrApp {
    /// Build the app and run the pipeline once over the configured file.
    pub fn new(data_file: &str) -> Self {
        let mut state = AppState::new(data_file);
        state.reload();
        Self { state }
    }
}

impl eframe::App for FitCorrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the report blocks ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::dashboard(ui, &self.state);
        });
    }
}
