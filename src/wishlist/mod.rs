pub mod config;
pub mod types;

pub use config::{config_or_default, load_or_init_config};
pub use types::{AppConfig, Favorite, Product};
