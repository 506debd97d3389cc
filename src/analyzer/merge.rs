//! Threshold, merge, and spacing policy over scored windows.
//!
//! Runs strictly after all window scores are known, sequentially, so the
//! documented tie-break and gap-resolution order holds no matter how the
//! scoring pass was parallelized:
//!
//! 1. Drop windows below the preset threshold.
//! 2. Merge neighboring survivors (starts within one window step) into one
//!    interval, keeping the peak window's score rather than summing -
//!    overlapping windows see the same messages, and summing would double
//!    count them.
//! 3. Enforce the minimum gap greedily, highest score first.
//! 4. Label each survivor with its dominant contributing term(s).

use crate::preset::{Scorer, WindowParams};

use super::types::{Highlight, ScoredWindow};

/// Slack for float comparisons between window starts computed as
/// multiples of the step.
const STEP_TOLERANCE: f64 = 1e-9;

/// Reduce scored windows to the final ranked highlight list.
pub fn merge_windows<S: Scorer>(
    windows: Vec<ScoredWindow>,
    params: &WindowParams,
    scorer: &S,
) -> Vec<Highlight> {
    let surviving: Vec<ScoredWindow> = windows
        .into_iter()
        .filter(|w| w.score >= params.threshold)
        .collect();
    tracing::debug!(surviving = surviving.len(), "windows above threshold");

    let merged = merge_neighbors(surviving, params.step_s);
    let spaced = enforce_min_gap(merged, params.min_gap_s);

    let mut highlights: Vec<Highlight> = spaced
        .into_iter()
        .map(|w| Highlight {
            time: w.range.start,
            score: w.score,
            message_count: w.message_count,
            label: dominant_label(&w, scorer),
        })
        .collect();
    rank(&mut highlights);
    highlights
}

/// Sort highlights by descending score, ties broken by the earlier
/// timestamp.
pub(super) fn rank(highlights: &mut [Highlight]) {
    highlights.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal))
    });
}

/// Merge runs of windows whose starts are within `step_s` of each other.
///
/// Each run collapses to its peak window (max score; earlier window wins
/// ties), which carries the representative timestamp, message count, and
/// term contributions for the whole interval.
pub(super) fn merge_neighbors(windows: Vec<ScoredWindow>, step_s: f64) -> Vec<ScoredWindow> {
    let mut merged: Vec<ScoredWindow> = Vec::new();
    let mut run_last_start = f64::NEG_INFINITY;

    for window in windows {
        // Starts are i * step_s; the product is not exact for steps like
        // 0.1, so the adjacency check needs a tolerance.
        let adjacent = window.range.start - run_last_start <= step_s + STEP_TOLERANCE;
        run_last_start = window.range.start;
        match merged.last_mut() {
            Some(peak) if adjacent => {
                if window.score > peak.score {
                    *peak = window;
                }
            }
            _ => merged.push(window),
        }
    }
    merged
}

/// Greedy minimum-gap resolution, highest score first.
///
/// Candidates are processed in descending score order (ties by earlier
/// start); a candidate is accepted only if no previously accepted one lies
/// within `min_gap_s`. Output is restored to chronological order.
pub(super) fn enforce_min_gap(windows: Vec<ScoredWindow>, min_gap_s: f64) -> Vec<ScoredWindow> {
    let mut by_score = windows;
    by_score.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                a.range
                    .start
                    .partial_cmp(&b.range.start)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    let mut accepted: Vec<ScoredWindow> = Vec::new();
    for candidate in by_score {
        let conflict = accepted
            .iter()
            .any(|a| (a.range.start - candidate.range.start).abs() < min_gap_s);
        if !conflict {
            accepted.push(candidate);
        }
    }
    accepted.sort_by(|a, b| {
        a.range
            .start
            .partial_cmp(&b.range.start)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    accepted
}

/// Name the term(s) contributing the largest share of a window's score.
///
/// Ties keep every tied term, in preset declaration order (contributions
/// are already stored in that order).
fn dominant_label<S: Scorer>(window: &ScoredWindow, scorer: &S) -> String {
    let max = window
        .contributions
        .iter()
        .map(|&(_, c)| c)
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return String::new();
    }
    let labels: Vec<&str> = window
        .contributions
        .iter()
        .filter(|&&(_, c)| (max - c).abs() < 1e-9)
        .map(|&(i, _)| scorer.term_label(i))
        .collect();
    labels.join(", ")
}
