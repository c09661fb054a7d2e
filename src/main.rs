mod app;
mod config;
mod data;
mod state;
mod ui;

use app::FichaViewerApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env();
    if config.source_url.is_empty() {
        log::warn!("{} is not set; open a local CSV or enter a URL", config::ENV_SOURCE_URL);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([700.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Solicitudes de formación por instructor",
        options,
        Box::new(|cc| Ok(Box::new(FichaViewerApp::new(config, &cc.egui_ctx)))),
    )
}
