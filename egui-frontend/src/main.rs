use eframe::egui;
use log::{error, info};

mod assets;
mod config;
mod ui;

use config::AppConfig;
use ui::TodoBingoApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Todo Bingo");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    // The screen layouts are drawn on a fixed canvas, so the window never resizes
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.window.title.clone())
            .with_resizable(false),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Todo Bingo",
        options,
        Box::new(|cc| match TodoBingoApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized Todo Bingo");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                // Convert anyhow::Error to eframe::Error
                Err(format!("Failed to initialize app: {:#}", e).into())
            }
        }),
    )
}
