mod app;
mod config;
mod convert;
mod panels;

use anyhow::Context as _;
use recrop_core::geometry::DisplayGeometry;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = config::AppConfig::load(std::path::Path::new("recrop.toml"))?;

    let image = recrop_core::asset::load(&config.asset)
        .with_context(|| format!("failed to load source image {}", config.asset.display()))?;
    let geometry = DisplayGeometry::fit_width(image.width(), image.height(), config.screen)
        .context("invalid source image dimensions")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.screen.width, config.screen.height])
            .with_title("Recrop"),
        ..Default::default()
    };

    eframe::run_native(
        "Recrop",
        options,
        Box::new(move |_cc| Ok(Box::new(app::RecropApp::new(config, geometry, image)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
