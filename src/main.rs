mod app;
mod config;
mod data;
mod state;
mod style;
mod ui;

use std::path::PathBuf;

use app::ActionsBoardApp;
use config::BoardConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional first argument: path to the JSON config file.
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("actions-board.json"));

    let config = match BoardConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();
    let mut state = AppState::new(config, today);
    state.reload();

    // Cannot run without both tables.
    if state.cache.get().is_none() {
        log::error!("initial load failed, exiting");
        std::process::exit(1);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Actions Televendas 📈",
        options,
        Box::new(|_cc| Ok(Box::new(ActionsBoardApp::new(state)))),
    )
}
