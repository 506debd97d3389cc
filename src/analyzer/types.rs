//! Data structures for activity analysis.

use crate::chatlog::Timecode;

/// A half-open time range `[start, end)` within a VOD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    /// Start offset in seconds from VOD start.
    pub start: f64,
    /// End offset in seconds from VOD start (exclusive).
    pub end: f64,
}

impl TimeRange {
    /// Create a new time range.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Duration of this range in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Check if a timestamp falls within `[start, end)`.
    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start && timestamp < self.end
    }
}

/// One scored analysis window.
///
/// Ephemeral: produced and consumed inside the analyzer, never returned to
/// callers.
#[derive(Debug, Clone)]
pub struct ScoredWindow {
    /// The window's time range.
    pub range: TimeRange,

    /// Aggregate score of all messages in the window.
    pub score: f64,

    /// Number of messages that contributed a non-zero score.
    pub message_count: usize,

    /// Per-term score totals as `(term index, total contribution)`,
    /// ordered by term declaration.
    pub contributions: Vec<(usize, f64)>,
}

/// One reported interesting timestamp.
///
/// Ownership passes to the caller; reporting collaborators render these
/// however they like.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    /// Representative timestamp in seconds (the peak window's start).
    pub time: f64,

    /// Peak window score for the merged interval.
    pub score: f64,

    /// Contributing message count of the peak window.
    pub message_count: usize,

    /// Dominant contributing term pattern(s), for human-readable output.
    pub label: String,
}

impl Highlight {
    /// The representative timestamp as a [`Timecode`].
    pub fn timecode(&self) -> Timecode {
        Timecode::from_seconds(self.time)
    }
}
