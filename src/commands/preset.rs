//! Preset inspection command handlers

use anyhow::{bail, Result};

use vodscope::MatchMode;

use super::load_presets;

/// List available preset names.
pub fn list(channel: Option<&str>) -> Result<()> {
    let store = load_presets(channel)?;
    if store.is_empty() {
        println!(
            "No presets found. Create {} to define some.",
            vodscope::config::presets_path()?.display()
        );
        return Ok(());
    }
    println!("Presets ({}):", store.len());
    for name in store.names() {
        println!("  {}", name);
    }
    Ok(())
}

/// Show one preset's terms and window parameters.
pub fn show(name: &str, channel: Option<&str>) -> Result<()> {
    let store = load_presets(channel)?;
    let Some(preset) = store.get(name) else {
        bail!(
            "Unknown preset '{}'; available: {}",
            name,
            store.names().join(", ")
        );
    };

    println!("Preset \"{}\":", preset.name);
    println!(
        "  window {}s / step {}s, threshold {}, min gap {}s",
        preset.window.length_s,
        preset.window.step_s,
        preset.window.threshold,
        preset.window.min_gap_s
    );
    println!("  terms:");
    for term in &preset.terms {
        let mode = match term.mode {
            MatchMode::Exact => "exact",
            MatchMode::Substring => "substring",
            MatchMode::Emote => "emote",
        };
        println!("    {} ({}, weight {})", term.pattern, mode, term.weight);
    }
    Ok(())
}
