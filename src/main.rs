mod ai;
mod config;
mod core;
mod logger;
mod prompt;
mod ui;

use anyhow::{anyhow, Context};
use config::Config;
use eframe::NativeOptions;
use ui::LocalApp;

fn main() -> anyhow::Result<()> {
    logger::init();
    log::info!("🚀 Ask a Local starting");

    // UI stays on the main thread, queries run on this runtime
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let _guard = rt.enter();

    let config = Config::from_env();
    log::info!("📁 Backends: {}", config.describe_backends());
    let title = config.app_title.clone();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(LocalApp::new(config)))
        }),
    )
    .map_err(|e| anyhow!("window failed: {}", e))
}
