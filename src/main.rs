use axiom::{Axiom, Config};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Axiom");

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Axiom"),
        ..Default::default()
    };

    eframe::run_native(
        "Axiom",
        options,
        Box::new(move |cc| Ok(Box::new(Axiom::new(cc, &config)))),
    )
}
