//! Preset type definitions and validation.
//!
//! A preset is a named, reusable scoring configuration: an ordered set of
//! weighted terms plus the window parameters driving the analyzer. Presets
//! are immutable inputs to a run - created and edited externally, consumed
//! read-only here.

use serde::{Deserialize, Serialize};

use crate::error::PresetError;

/// How a term's pattern is matched against a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Whitespace/punctuation-delimited token equality, case-insensitive.
    #[default]
    Exact,

    /// Containment anywhere in the text, case-insensitive.
    Substring,

    /// Match against the message's emote annotations, case-sensitive.
    /// Contribution scales with the emote's per-message count.
    Emote,
}

/// A single weighted search term within a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetTerm {
    /// Literal token or emote name to look for.
    pub pattern: String,

    /// Score contributed per match. Must be positive and finite.
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Matching mode for this term.
    #[serde(default)]
    pub mode: MatchMode,
}

fn default_weight() -> f64 {
    1.0
}

impl PresetTerm {
    /// Create an exact-token term with weight 1.0.
    pub fn exact(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            weight: 1.0,
            mode: MatchMode::Exact,
        }
    }

    /// Create a substring term with weight 1.0.
    pub fn substring(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            weight: 1.0,
            mode: MatchMode::Substring,
        }
    }

    /// Create an emote term with weight 1.0.
    pub fn emote(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            weight: 1.0,
            mode: MatchMode::Emote,
        }
    }

    /// Builder-style weight override.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// Window parameters for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Window length in seconds.
    pub length_s: f64,

    /// Window advance per step in seconds. Steps smaller than the length
    /// give overlapping windows, so short bursts near a boundary are still
    /// captured by a neighboring window.
    pub step_s: f64,

    /// Minimum aggregate window score to report.
    pub threshold: f64,

    /// Minimum gap between reported timestamps in seconds.
    pub min_gap_s: f64,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            length_s: 30.0,
            step_s: 30.0,
            threshold: 10.0,
            min_gap_s: 60.0,
        }
    }
}

impl WindowParams {
    /// Validate the window parameters on their own.
    ///
    /// Used directly by analyses that run without a preset (activity
    /// metrics); [`Preset::validate`] layers the term checks on top.
    pub fn validate(&self) -> Result<(), PresetError> {
        if !(self.length_s > 0.0 && self.length_s.is_finite()) {
            return Err(PresetError::InvalidWindowLength {
                value: self.length_s,
            });
        }
        if !(self.step_s > 0.0 && self.step_s.is_finite()) {
            return Err(PresetError::InvalidWindowStep { value: self.step_s });
        }
        if self.threshold < 0.0 || !self.threshold.is_finite() {
            return Err(PresetError::NegativeThreshold {
                value: self.threshold,
            });
        }
        if self.min_gap_s < 0.0 || !self.min_gap_s.is_finite() {
            return Err(PresetError::NegativeMinGap {
                value: self.min_gap_s,
            });
        }
        Ok(())
    }
}

/// A named scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Preset name, used for lookup and report headers.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Ordered terms; declaration order breaks labeling ties.
    pub terms: Vec<PresetTerm>,

    /// Window parameters for this preset.
    #[serde(default, flatten)]
    pub window: WindowParams,
}

impl Preset {
    /// Create a preset with default window parameters.
    pub fn new(name: impl Into<String>, terms: Vec<PresetTerm>) -> Self {
        Self {
            name: name.into(),
            terms,
            window: WindowParams::default(),
        }
    }

    /// Builder-style window parameter override.
    pub fn with_window(mut self, window: WindowParams) -> Self {
        self.window = window;
        self
    }

    /// Validate the preset's parameters.
    ///
    /// Must pass before any processing begins; an invalid preset is a
    /// configuration error, never a partial result.
    pub fn validate(&self) -> Result<(), PresetError> {
        if self.terms.is_empty() {
            return Err(PresetError::EmptyTerms {
                name: self.name.clone(),
            });
        }
        self.window.validate()?;
        for term in &self.terms {
            if !(term.weight > 0.0 && term.weight.is_finite()) {
                return Err(PresetError::InvalidWeight {
                    pattern: term.pattern.clone(),
                    weight: term.weight,
                });
            }
        }
        Ok(())
    }
}
