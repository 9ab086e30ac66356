use tradedesk::config::Config;
use tradedesk::interfaces::app::DeskApp;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok(); // Load .env file

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("TradeDesk {} starting...", env!("CARGO_PKG_VERSION"));

    // 2. Load Config
    let config = Config::from_env()?;
    info!(
        "Default market: {}, window {}x{}",
        config.default_market, config.window_width, config.window_height
    );

    let window_size = [config.window_width, config.window_height];
    let app = DeskApp::new(config);

    // 3. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title("TradeDesk"),
        ..Default::default()
    };

    eframe::run_native(
        "TradeDesk",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
