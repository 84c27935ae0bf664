use crate::wishlist::types::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("wishlist-prompt");
    Ok(app_config_dir.join("config.jsonc"))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    Ok(config)
}

/// Saves the configuration to `path`.
/// Note: Comments in an existing file will not be preserved.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// Loads the config, writing the defaults first if there is no file yet.
pub fn load_or_init_config() -> Result<AppConfig> {
    init_config_at(&get_config_path()?)
}

/// Falls back to the defaults when loading failed. Call after logging is set up.
pub fn config_or_default(loaded: Result<AppConfig>) -> AppConfig {
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    })
}

fn init_config_at(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        return load_config_from(path);
    }

    let config = AppConfig::new();
    save_config_to(path, &config)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(config)
}
