mod app;
mod notices;
mod panels;
mod theme;

use app::AdminApp;
use eframe::egui;
use prodraft_core::types::AppConfig;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data_dir = data_dir();
    let config = AppConfig::load(&AppConfig::path(&data_dir)).unwrap_or_else(|err| {
        tracing::warn!("failed to load config: {err}");
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::WINDOW_DEFAULT_SIZE)
            .with_min_inner_size(theme::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Prodraft",
        options,
        Box::new(move |cc| {
            theme::apply_theme(&cc.egui_ctx, config.theme);
            Ok(Box::new(AdminApp::new(data_dir, config)))
        }),
    )
}

fn data_dir() -> PathBuf {
    std::env::var("PRODRAFT_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("prodraft")
        })
}
