//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Create a fake home directory with a preset file in
/// `.config/vodscope/presets.toml`.
pub fn setup_home(presets_toml: &str) -> TempDir {
    let home = TempDir::new().expect("Failed to create temp home");
    let config_dir = home.path().join(".config").join("vodscope");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("presets.toml"), presets_toml).expect("Failed to write presets");
    home
}

/// Write a per-channel preset file into an existing fake home.
pub fn write_channel_presets(home: &TempDir, channel: &str, presets_toml: &str) {
    let path = home
        .path()
        .join(".config")
        .join("vodscope")
        .join(format!("presets.{}.toml", channel));
    fs::write(path, presets_toml).expect("Failed to write channel presets");
}

/// Write a chat log under the fake home and return its path.
pub fn write_log(home: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = home.path().join(name);
    fs::write(&path, contents).expect("Failed to write log");
    path
}

/// Build a vodscope command running against the given fake home.
pub fn vodscope(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vodscope").expect("Failed to find vodscope binary");
    cmd.env("HOME", home.path()).env("NO_COLOR", "1");
    cmd
}

/// A minimal preset file: one exact term, low threshold so short test
/// logs produce results.
pub const BASIC_PRESETS: &str = r#"
[hype]
threshold = 2.0
min_gap_s = 60.0
terms = [{ pattern = "gg" }]
"#;
