//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::types::Config;

/// Get the config file path (~/.config/vodscope/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the config directory path (~/.config/vodscope)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("vodscope"))
}

/// Get the global preset file path (~/.config/vodscope/presets.toml)
pub fn presets_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("presets.toml"))
}

/// Get a per-channel preset file path (~/.config/vodscope/presets.<channel>.toml)
pub fn channel_presets_path(channel: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(format!("presets.{}.toml", channel)))
}

/// Load configuration from file, or return defaults if not found
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Save configuration to file
pub fn save(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(())
}
