//! Scoring presets: term definitions, message scoring, and preset files.
//!
//! - [`types`] - [`Preset`], [`PresetTerm`], [`MatchMode`], [`WindowParams`]
//!   and fail-fast validation
//! - [`score`] - the pure [`Scorer`] contract and its [`Preset`] impl
//! - [`store`] - read-only TOML preset files with per-channel shadowing

mod score;
mod store;
mod types;

pub use score::{MessageScore, Scorer};
pub use store::PresetStore;
pub use types::{MatchMode, Preset, PresetTerm, WindowParams};
