//! The activity analysis engine.
//!
//! Slides a time window across a filtered chat log, accumulates per-window
//! scores against a preset, and extracts, merges, and ranks the intervals
//! exceeding the preset's threshold.
//!
//! # Pipeline
//!
//! ```text
//! filtered log -> score_windows (parallel) -> merge/space (sequential) -> ranked highlights
//! ```
//!
//! The whole run is a pure function of the log and the preset: calling
//! [`analyze`] twice with identical inputs yields identical output.
//!
//! # Example
//!
//! ```
//! use vodscope::{analyze, ChatLog, Message, Preset, PresetTerm, WindowParams};
//!
//! let mut log = ChatLog::new(None);
//! log.messages.push(Message::new(0.0, "a", "gg ez"));
//! log.messages.push(Message::new(1.0, "b", "gg"));
//! log.messages.push(Message::new(2.0, "c", "gg"));
//!
//! let preset = Preset::new("hype", vec![PresetTerm::exact("gg")])
//!     .with_window(WindowParams { length_s: 5.0, step_s: 5.0, threshold: 2.0, min_gap_s: 10.0 });
//!
//! let highlights = analyze(&log, &preset)?;
//! assert_eq!(highlights.len(), 1);
//! assert!((highlights[0].score - 3.0).abs() < 0.001);
//! # Ok::<(), vodscope::AnalyzeError>(())
//! ```

mod activity;
mod merge;
mod types;
mod windows;

pub use activity::{analyze_activity, ActivityMetric};
pub use types::{Highlight, ScoredWindow, TimeRange};

use crate::chatlog::ChatLog;
use crate::error::AnalyzeError;
use crate::preset::{Preset, Scorer, WindowParams};

/// Analyze a filtered log against a preset.
///
/// Validates the preset and the log's timestamp ordering first (fail
/// fast, no partial results), then runs the windowed scoring pipeline.
/// Window aggregation binary-searches the message list by time, so a
/// misordered log must be rejected here rather than silently mis-summed.
/// An empty log yields an empty highlight list, not an error.
///
/// # Errors
///
/// Returns [`AnalyzeError`] when the preset's parameters are invalid or
/// the log's timestamps decrease.
pub fn analyze(log: &ChatLog, preset: &Preset) -> Result<Vec<Highlight>, AnalyzeError> {
    preset.validate()?;
    log.validate()?;
    Ok(analyze_with(log, &preset.window, preset))
}

/// Analyze with an explicit scorer.
///
/// This is the plugin seam: channel-specific scoring implementations pass
/// any [`Scorer`] here with pre-validated window parameters. [`analyze`]
/// is the convenience wrapper for the standard preset scorer.
pub fn analyze_with<S: Scorer + Sync>(
    log: &ChatLog,
    params: &WindowParams,
    scorer: &S,
) -> Vec<Highlight> {
    let scored = windows::score_windows(log, params, scorer);
    let highlights = merge::merge_windows(scored, params, scorer);
    tracing::debug!(highlights = highlights.len(), "analysis complete");
    highlights
}
