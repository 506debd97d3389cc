//! Command handlers
//!
//! One module per subcommand. Shared helpers that more than one
//! command needs live here.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod preset;
pub mod suggest;

use anyhow::{Context, Result};

use vodscope::config::{channel_presets_path, presets_path};
use vodscope::PresetStore;

/// Load the preset store, layering per-channel presets on top when a
/// channel was given.
pub fn load_presets(channel: Option<&str>) -> Result<PresetStore> {
    let path = presets_path()?;
    let mut store = PresetStore::load(&path)
        .with_context(|| format!("Failed to load presets from {}", path.display()))?;
    if let Some(channel) = channel {
        let channel_path = channel_presets_path(channel)?;
        store.merge_file(&channel_path).with_context(|| {
            format!(
                "Failed to load channel presets from {}",
                channel_path.display()
            )
        })?;
    }
    Ok(store)
}
