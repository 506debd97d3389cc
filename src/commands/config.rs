//! Config command handlers

use anyhow::{Context, Result};

use vodscope::Config;

/// Show the active configuration as TOML.
pub fn show() -> Result<()> {
    let config = Config::load()?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    print!("{}", rendered);
    Ok(())
}

/// Print the config file path.
pub fn path() -> Result<()> {
    println!("{}", vodscope::config::config_path()?.display());
    Ok(())
}

/// Write a default config file, refusing to clobber an existing one.
pub fn init() -> Result<()> {
    let path = vodscope::config::config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    vodscope::config::save(&Config::default())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
