//! Ocean explorer entry point

use anyhow::Result;
use eframe::egui;
use tracing::info;

use ov_data::DataConfig;

mod app;
mod logging;

use app::OceanExplorerApp;

fn main() -> Result<()> {
    logging::init();

    let arg = std::env::args().nth(1);
    let config = DataConfig::from_arg(arg.as_deref())?;
    info!("Loading datasets from {:?}", config.data_dir);

    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Ocean Explorer"),
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };

    eframe::run_native(
        "Ocean Explorer",
        options,
        Box::new(move |cc| Box::new(OceanExplorerApp::new(cc, runtime, config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
