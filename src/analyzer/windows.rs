//! Windowed score aggregation.
//!
//! Partitions the VOD's time span into fixed-length windows advancing by a
//! configurable step (overlapping when step < length) and sums message
//! scores per window. Message scoring and window aggregation are
//! parallelized with rayon; both passes are order-independent, so the
//! output is deterministic regardless of worker scheduling.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::chatlog::ChatLog;
use crate::preset::{MessageScore, Scorer, WindowParams};

use super::types::{ScoredWindow, TimeRange};

/// Score every window over the log's time span.
///
/// Returns all windows, including zero-score ones; thresholding is the
/// merge stage's job. The caller guarantees `params` passed validation.
pub fn score_windows<S: Scorer + Sync>(
    log: &ChatLog,
    params: &WindowParams,
    scorer: &S,
) -> Vec<ScoredWindow> {
    if log.is_empty() {
        return Vec::new();
    }

    // One scoring pass per message; windows then aggregate by range so
    // overlapping windows never rescore a message.
    let scores: Vec<MessageScore> = log
        .messages
        .par_iter()
        .map(|msg| scorer.score(msg))
        .collect();

    let starts = window_starts(log.duration(), params.step_s);
    tracing::debug!(
        windows = starts.len(),
        messages = log.len(),
        "scoring windows"
    );

    starts
        .into_par_iter()
        .map(|start| {
            let range = TimeRange::new(start, start + params.length_s);
            aggregate_window(log, &scores, range)
        })
        .collect()
}

/// Window start offsets covering `[0, duration]`.
///
/// The final window may extend past the last message; a burst at the very
/// end of the VOD still gets scored.
pub(super) fn window_starts(duration: f64, step_s: f64) -> Vec<f64> {
    let count = (duration / step_s).floor() as usize + 1;
    (0..count).map(|i| i as f64 * step_s).collect()
}

/// Sum pre-computed message scores for one window range.
fn aggregate_window(log: &ChatLog, scores: &[MessageScore], range: TimeRange) -> ScoredWindow {
    // Messages are chronological, so the window's slice is found by
    // binary search rather than a full scan per window.
    let first = log.messages.partition_point(|m| m.time < range.start);
    let last = log.messages.partition_point(|m| m.time < range.end);

    let mut score = 0.0;
    let mut message_count = 0;
    let mut contributions: BTreeMap<usize, f64> = BTreeMap::new();
    for msg_score in &scores[first..last] {
        if msg_score.total <= 0.0 {
            continue;
        }
        score += msg_score.total;
        message_count += 1;
        for &(term, contribution) in &msg_score.contributions {
            *contributions.entry(term).or_insert(0.0) += contribution;
        }
    }

    ScoredWindow {
        range,
        score,
        message_count,
        contributions: contributions.into_iter().collect(),
    }
}
