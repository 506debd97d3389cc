//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::preset::WindowParams;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub exclusions: ExclusionConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            exclusions: ExclusionConfig::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

/// Defaults applied when a preset or the CLI does not override them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Default window parameters for presets that omit them
    #[serde(default)]
    pub window: WindowParams,
    /// Maximum results shown per report
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Path to a JSON array of known emote names, if any
    #[serde(default)]
    pub emote_file: Option<PathBuf>,
}

pub fn default_result_limit() -> usize {
    50
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: WindowParams::default(),
            result_limit: default_result_limit(),
            emote_file: None,
        }
    }
}

/// Message exclusion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionConfig {
    /// Known bot account names (lowercase)
    #[serde(default)]
    pub bots: Vec<String>,
    /// Chat command prefixes
    #[serde(default = "default_command_prefixes")]
    pub command_prefixes: Vec<String>,
}

pub fn default_command_prefixes() -> Vec<String> {
    vec!["!".to_string()]
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            bots: Vec::new(),
            command_prefixes: default_command_prefixes(),
        }
    }
}

/// Term suggestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// How many candidates to show
    #[serde(default = "default_suggestion_count")]
    pub count: usize,
    /// Path to a newline-delimited common-word stoplist
    #[serde(default)]
    pub stoplist_file: Option<PathBuf>,
    /// Path to a newline-delimited list of hidden terms
    #[serde(default)]
    pub hidden_file: Option<PathBuf>,
}

pub fn default_suggestion_count() -> usize {
    50
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            count: default_suggestion_count(),
            stoplist_file: None,
            hidden_file: None,
        }
    }
}
