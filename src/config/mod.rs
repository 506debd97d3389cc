//! Application configuration.
//!
//! TOML config at `~/.config/vodscope/config.toml`, loaded once per run.
//! A missing file yields defaults; a malformed one is an error with the
//! offending path. Presets live next to the config in `presets.toml` plus
//! optional per-channel `presets.<channel>.toml` files.

mod io;
mod types;

pub use io::{channel_presets_path, config_dir, config_path, load, presets_path, save};
pub use types::{AnalysisConfig, Config, ExclusionConfig, SuggestConfig};

impl Config {
    /// Load configuration from the default location, or defaults.
    pub fn load() -> anyhow::Result<Self> {
        io::load()
    }
}
