//! Preset-free activity metrics.
//!
//! Derivative analyses computed from message volume alone, with no term
//! list: repeated messages piling up (spam) or many distinct messages at
//! once (unique). Both are window-level statistics - they depend on how
//! many messages fall in a window and how many of them are distinct - so
//! they run through their own aggregation pass rather than the per-message
//! [`Scorer`](crate::preset::Scorer) seam, then share the same threshold,
//! merge, and spacing policy as preset analysis.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::chatlog::ChatLog;
use crate::error::AnalyzeError;
use crate::preset::WindowParams;

use super::types::{Highlight, ScoredWindow, TimeRange};
use super::{merge, windows};

/// A built-in activity metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityMetric {
    /// Repetition pressure: grows with message volume, shrinks as the
    /// messages diversify. High when chat floods the same thing.
    Spam,

    /// Diversity pressure: grows with distinct messages, shrinks with
    /// repetition. High when many people say different things at once.
    Unique,
}

impl ActivityMetric {
    /// Score one window from its message count and distinct-text count.
    fn score(&self, message_count: usize, unique_count: usize) -> f64 {
        if message_count == 0 {
            return 0.0;
        }
        let n = message_count as f64;
        let u = unique_count as f64;
        match self {
            // Rewards volume quadratically, discounts by diversity.
            ActivityMetric::Spam => (n.powi(2) / (2.0 * u.powf(1.1))).round(),
            // Rewards diversity superlinearly, discounts by raw volume.
            ActivityMetric::Unique => (u.powf(2.7) / (2.0 * n.powf(1.1))).round(),
        }
    }

    /// Human-readable metric name, used as the highlight label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityMetric::Spam => "spam",
            ActivityMetric::Unique => "unique",
        }
    }
}

/// Analyze a filtered log with a built-in activity metric.
///
/// Same window partition, threshold, merge, and minimum-gap policy as
/// [`analyze`](super::analyze), but each window is scored from its own
/// message statistics instead of summed per-message term scores.
///
/// # Errors
///
/// Returns [`AnalyzeError`] when the window parameters are invalid or the
/// log's timestamps decrease.
pub fn analyze_activity(
    log: &ChatLog,
    params: &WindowParams,
    metric: ActivityMetric,
) -> Result<Vec<Highlight>, AnalyzeError> {
    params.validate()?;
    log.validate()?;
    if log.is_empty() {
        return Ok(Vec::new());
    }

    let scored: Vec<ScoredWindow> = windows::window_starts(log.duration(), params.step_s)
        .into_par_iter()
        .map(|start| {
            let range = TimeRange::new(start, start + params.length_s);
            score_window(log, range, metric)
        })
        .collect();
    tracing::debug!(
        windows = scored.len(),
        metric = metric.label(),
        "scored activity windows"
    );

    let surviving: Vec<ScoredWindow> = scored
        .into_iter()
        .filter(|w| w.score >= params.threshold)
        .collect();
    let merged = merge::merge_neighbors(surviving, params.step_s);
    let spaced = merge::enforce_min_gap(merged, params.min_gap_s);

    let mut highlights: Vec<Highlight> = spaced
        .into_iter()
        .map(|w| Highlight {
            time: w.range.start,
            score: w.score,
            message_count: w.message_count,
            label: metric.label().to_string(),
        })
        .collect();
    merge::rank(&mut highlights);
    Ok(highlights)
}

/// Compute one window's metric score from its message slice.
fn score_window(log: &ChatLog, range: TimeRange, metric: ActivityMetric) -> ScoredWindow {
    let first = log.messages.partition_point(|m| m.time < range.start);
    let last = log.messages.partition_point(|m| m.time < range.end);
    let slice = &log.messages[first..last];

    let unique: HashSet<&str> = slice.iter().map(|m| m.text.as_str()).collect();
    ScoredWindow {
        range,
        score: metric.score(slice.len(), unique.len()),
        message_count: slice.len(),
        contributions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatlog::Message;
    use crate::error::{LogError, PresetError};

    fn log_of(times_and_texts: &[(f64, &str)]) -> ChatLog {
        ChatLog {
            vod_id: None,
            messages: times_and_texts
                .iter()
                .map(|&(t, text)| Message::new(t, "viewer", text))
                .collect(),
        }
    }

    fn params(threshold: f64) -> WindowParams {
        WindowParams {
            length_s: 10.0,
            step_s: 10.0,
            threshold,
            min_gap_s: 0.0,
        }
    }

    #[test]
    fn spam_rewards_repetition() {
        // 4 copies of one message: n=4, u=1 -> 4^2 / 2 = 8.
        let copies = log_of(&[(0.0, "W"), (1.0, "W"), (2.0, "W"), (3.0, "W")]);
        // 4 distinct messages: n=4, u=4 -> 16 / (2 * 4^1.1) ~= 1.7 -> 2.
        let varied = log_of(&[(0.0, "a"), (1.0, "b"), (2.0, "c"), (3.0, "d")]);

        let spam_copies = analyze_activity(&copies, &params(1.0), ActivityMetric::Spam).unwrap();
        let spam_varied = analyze_activity(&varied, &params(1.0), ActivityMetric::Spam).unwrap();
        assert!((spam_copies[0].score - 8.0).abs() < 0.001);
        assert!(spam_copies[0].score > spam_varied[0].score);
        assert_eq!(spam_copies[0].label, "spam");
        assert_eq!(spam_copies[0].message_count, 4);
    }

    #[test]
    fn unique_rewards_diversity() {
        let copies = log_of(&[(0.0, "W"), (1.0, "W"), (2.0, "W"), (3.0, "W")]);
        let varied = log_of(&[(0.0, "a"), (1.0, "b"), (2.0, "c"), (3.0, "d")]);

        let t = params(0.0);
        let unique_copies = analyze_activity(&copies, &t, ActivityMetric::Unique).unwrap();
        let unique_varied = analyze_activity(&varied, &t, ActivityMetric::Unique).unwrap();
        assert!(unique_varied[0].score > unique_copies[0].score);
        assert_eq!(unique_varied[0].label, "unique");
    }

    #[test]
    fn threshold_and_gap_apply_to_metrics() {
        // Two identical bursts 10s apart, minimum gap 60: one survivor.
        let log = log_of(&[
            (0.0, "W"),
            (1.0, "W"),
            (2.0, "W"),
            (30.0, "W"),
            (31.0, "W"),
        ]);
        let p = WindowParams {
            length_s: 5.0,
            step_s: 5.0,
            threshold: 2.0,
            min_gap_s: 60.0,
        };
        let highlights = analyze_activity(&log, &p, ActivityMetric::Spam).unwrap();
        assert_eq!(highlights.len(), 1);
        assert!((highlights[0].time - 0.0).abs() < 0.001);
    }

    #[test]
    fn empty_log_yields_empty_results() {
        let highlights =
            analyze_activity(&ChatLog::new(None), &params(0.0), ActivityMetric::Spam).unwrap();
        assert!(highlights.is_empty());
    }

    #[test]
    fn invalid_params_fail_before_processing() {
        let log = log_of(&[(0.0, "W")]);
        let mut p = params(0.0);
        p.step_s = 0.0;
        assert!(matches!(
            analyze_activity(&log, &p, ActivityMetric::Spam),
            Err(AnalyzeError::Preset(PresetError::InvalidWindowStep { .. }))
        ));
    }

    #[test]
    fn misordered_log_is_rejected() {
        let log = log_of(&[(50.0, "W"), (1.0, "W")]);
        assert!(matches!(
            analyze_activity(&log, &params(0.0), ActivityMetric::Spam),
            Err(AnalyzeError::Log(LogError::TimestampOrder { .. }))
        ));
    }
}
