//! Error types for the analysis core.
//!
//! Two failure categories exist before any processing starts:
//!
//! - [`PresetError`] - a preset's parameters are invalid (configuration error)
//! - [`LogError`] - a log violates the non-decreasing-timestamp invariant
//!   (input shape error)
//!
//! Both are raised fail-fast: no partial result list is ever returned on
//! error. Everything past validation is pure computation and total over
//! arbitrary message content, so the analysis itself has no error paths.

use thiserror::Error;

/// A preset's parameters are invalid.
///
/// Raised by [`Preset::validate`](crate::preset::Preset::validate) before
/// any window is scored.
#[derive(Debug, Error, PartialEq)]
pub enum PresetError {
    /// The preset has no terms to score against.
    #[error("preset '{name}' has no terms; add at least one term before analyzing")]
    EmptyTerms {
        /// Name of the offending preset
        name: String,
    },

    /// Window length must be a positive, finite number of seconds.
    #[error("window length must be positive and finite, got {value}")]
    InvalidWindowLength {
        /// The rejected value
        value: f64,
    },

    /// Window step must be a positive, finite number of seconds.
    #[error("window step must be positive and finite, got {value}")]
    InvalidWindowStep {
        /// The rejected value
        value: f64,
    },

    /// Term weights must be positive and finite.
    #[error("term '{pattern}' has invalid weight {weight}; weights must be positive and finite")]
    InvalidWeight {
        /// Pattern of the offending term
        pattern: String,
        /// The rejected weight
        weight: f64,
    },

    /// The score threshold cannot be negative.
    #[error("score threshold must not be negative, got {value}")]
    NegativeThreshold {
        /// The rejected value
        value: f64,
    },

    /// The minimum gap between results cannot be negative.
    #[error("minimum gap must not be negative, got {value}")]
    NegativeMinGap {
        /// The rejected value
        value: f64,
    },
}

/// Any failure [`analyze`](crate::analyze) can raise before processing.
///
/// Both categories are checked up front, so a returned error always means
/// zero windows were scored.
#[derive(Debug, Error, PartialEq)]
pub enum AnalyzeError {
    /// The preset's parameters are invalid.
    #[error(transparent)]
    Preset(#[from] PresetError),

    /// The log violates the non-decreasing-timestamp invariant.
    #[error(transparent)]
    Log(#[from] LogError),
}

/// A log violates the shape the core requires.
///
/// The core never auto-sorts a misordered log: reordering would silently
/// change what the data means, so the caller gets the offending index
/// instead.
#[derive(Debug, Error, PartialEq)]
pub enum LogError {
    /// Message timestamps must be non-decreasing.
    #[error(
        "message {index} has timestamp {time}s, earlier than the previous message at {prev}s; \
         logs must be in chronological order"
    )]
    TimestampOrder {
        /// Index of the offending message within the log
        index: usize,
        /// The offending timestamp
        time: f64,
        /// The preceding timestamp
        prev: f64,
    },
}
