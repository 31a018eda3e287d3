mod app;
mod color;
mod data;
mod state;
mod ui;

use app::SatScopeApp;
use data::fetch::DEFAULT_ENDPOINT;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let endpoint =
        std::env::var("SATSCOPE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SatScope – Satellite Catalog Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(SatScopeApp::new(endpoint)))),
    )
}
