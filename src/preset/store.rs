//! Preset file loading.
//!
//! Presets live in TOML files: a global `presets.toml` in the config
//! directory plus optional per-channel files (`presets.<channel>.toml`)
//! whose entries shadow same-named global ones. Files are read once per
//! run and never written by the engine - preset editing is a human action.
//!
//! # File Format
//!
//! ```toml
//! [hype]
//! threshold = 4.0
//! min_gap_s = 120.0
//! terms = [
//!     { pattern = "gg" },
//!     { pattern = "clutch", mode = "substring", weight = 2.0 },
//!     { pattern = "PogChamp", mode = "emote", weight = 0.5 },
//! ]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::Preset;

/// All presets available to a run, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    presets: BTreeMap<String, Preset>,
}

impl PresetStore {
    /// Load presets from a single TOML file.
    ///
    /// A missing file yields an empty store; presets are optional until
    /// the user asks for one by name.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut store = Self::default();
        store.merge_file(path)?;
        Ok(store)
    }

    /// Merge another preset file into the store.
    ///
    /// Later files shadow earlier entries with the same name, which is how
    /// per-channel presets override global ones.
    pub fn merge_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset file: {}", path.display()))?;
        let raw: BTreeMap<String, Preset> = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse preset file: {}", path.display()))?;
        for (name, mut preset) in raw {
            preset.name = name.clone();
            self.presets.insert(name, preset);
        }
        Ok(())
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// All preset names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    /// Number of presets in the store.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the store holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
