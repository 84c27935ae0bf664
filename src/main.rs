mod app;
mod components;
mod state;
#[cfg(test)]
mod testing;
mod wishlist;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use tracing::info;
use tracing::level_filters::LevelFilter;
use wishlist::{AppConfig, config_or_default, load_or_init_config};

fn main() {
    let loaded = load_or_init_config();
    let level = loaded
        .as_ref()
        .map(AppConfig::level_filter)
        .unwrap_or(LevelFilter::INFO);

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(level)
            .finish(),
    )
    .unwrap_or_else(|e| eprintln!("Failed to install log subscriber: {}", e));

    let config = config_or_default(loaded);

    let (width, height) = config.window.clamped_size();
    info!(
        products = config.catalog.len(),
        "Starting wishlist ({}x{})", width, height
    );

    let window_builder = WindowBuilder::new()
        .with_title(config.window.title.clone())
        .with_inner_size(LogicalSize::new(width as f64, height as f64));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .with_context(config)
        .launch(app::App);
}
