mod analysis;
mod app;
mod color;
mod data;
mod state;
mod ui;

use app::FitCorrApp;
use eframe::egui;

/// Relative path of the measurement export this dashboard analyses.
const DATA_FILE: &str = "fitness data.xlsx - KS_NFA_FTNESS_MESURE_ITEM_MESUR.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fitness Correlation Dashboard",
        options,
        Box::new(|cc| {
            install_cjk_font(&cc.egui_ctx);
            Ok(Box::new(FitCorrApp::new(DATA_FILE)))
        }),
    )
}

/// The measurement columns are named in Korean, which egui's bundled fonts
/// cannot shape. Probe well-known system font locations and append the first
/// hit as a fallback for both text families.
fn install_cjk_font(ctx: &egui::Context) {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "C:/Windows/Fonts/malgun.ttf",
    ];

    for path in CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert("cjk-fallback".to_owned(), egui::FontData::from_owned(bytes).into());
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push("cjk-fallback".to_owned());
        }
        ctx.set_fonts(fonts);
        log::info!("Korean labels rendered with {path}");
        return;
    }
    log::warn!("no CJK-capable font found; Korean column names will not render");
}
