//! Type definitions for VOD chat logs.
//!
//! This module contains the core types representing one VOD's chat log: an
//! ordered sequence of timestamped messages with optional emote annotations.
//! Logs are immutable once loaded and read-only during analysis.
//!
//! # Log Format
//!
//! On disk a chat log is plain text, one message per line:
//!
//! ```text
//! [00:15:02.371] chatter_one: gg ez
//! [00:15:03.017] chatter_two: PogChamp PogChamp
//! ```
//!
//! Timestamps are offsets from VOD start and must be non-decreasing.

use serde::{Deserialize, Serialize};

use crate::error::LogError;

// ============================================================================
// Message Types
// ============================================================================

/// A reference to an emote appearing in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteRef {
    /// Emote name, exactly as it appears in chat (case-sensitive).
    pub name: String,

    /// How many times the emote appears in the message.
    pub count: u32,
}

/// A single chat message.
///
/// Immutable once loaded. The timestamp is an offset in seconds from VOD
/// start, not wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Seconds since VOD start.
    pub time: f64,

    /// Author identifier (Twitch login name, always lowercase).
    pub author: String,

    /// Raw message text.
    pub text: String,

    /// Emotes appearing in the message, with per-message counts.
    ///
    /// Populated at load time from a known-emote name set; empty when no
    /// emote set was supplied.
    pub emotes: Vec<EmoteRef>,
}

impl Message {
    /// Create a new message with no emote annotations.
    pub fn new(time: f64, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            time,
            author: author.into(),
            text: text.into(),
            emotes: Vec::new(),
        }
    }

    /// Check if the message text starts with any of the given command prefixes.
    pub fn is_command(&self, prefixes: &[String]) -> bool {
        prefixes.iter().any(|p| !p.is_empty() && self.text.starts_with(p.as_str()))
    }

    /// Annotate the message with emotes from a known-name set.
    ///
    /// Whitespace-delimited tokens matching a known emote name (exactly,
    /// emote names are case-sensitive) become [`EmoteRef`]s with counts.
    pub fn annotate_emotes<S: std::hash::BuildHasher>(
        &mut self,
        known: &std::collections::HashSet<String, S>,
    ) {
        if known.is_empty() {
            return;
        }
        let mut refs: Vec<EmoteRef> = Vec::new();
        for token in self.text.split_whitespace() {
            if !known.contains(token) {
                continue;
            }
            match refs.iter_mut().find(|r| r.name == token) {
                Some(existing) => existing.count += 1,
                None => refs.push(EmoteRef {
                    name: token.to_string(),
                    count: 1,
                }),
            }
        }
        self.emotes = refs;
    }
}

// ============================================================================
// ChatLog
// ============================================================================

/// A complete chat log for one VOD.
///
/// Holds all messages in chronological order. Busy VODs can contain
/// hundreds of thousands of messages; the log is loaded once and treated
/// as read-only for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    /// VOD identifier, when known (used for links in reports).
    pub vod_id: Option<String>,

    /// All messages in chronological order.
    pub messages: Vec<Message>,
}

impl ChatLog {
    /// Create an empty log for the given VOD.
    pub fn new(vod_id: Option<String>) -> Self {
        Self {
            vod_id,
            messages: Vec::new(),
        }
    }

    /// Timestamp of the last message, or 0.0 for an empty log.
    pub fn duration(&self) -> f64 {
        self.messages.last().map(|m| m.time).unwrap_or(0.0)
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log contains no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Verify the non-decreasing-timestamp invariant.
    ///
    /// Returns the index of the first out-of-order message on failure.
    /// The log is never auto-sorted.
    pub fn validate(&self) -> Result<(), LogError> {
        let mut prev = 0.0_f64;
        for (index, msg) in self.messages.iter().enumerate() {
            if msg.time < prev {
                return Err(LogError::TimestampOrder {
                    index,
                    time: msg.time,
                    prev,
                });
            }
            prev = msg.time;
        }
        Ok(())
    }
}

// ============================================================================
// Timecode
// ============================================================================

/// A point in VOD time, split into display components.
///
/// Used for `HH:MM:SS` display strings and Twitch `?t=` link fragments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timecode {
    /// Original offset in seconds.
    pub total_seconds: f64,
    /// Whole hours.
    pub hours: u64,
    /// Whole minutes within the hour.
    pub minutes: u64,
    /// Whole seconds within the minute.
    pub seconds: u64,
    /// Milliseconds within the second.
    pub millis: u64,
}

impl Timecode {
    /// Split an offset in seconds into display components.
    ///
    /// Negative inputs clamp to zero; timestamps before VOD start do not
    /// exist.
    pub fn from_seconds(total: f64) -> Self {
        let total = total.max(0.0);
        let whole = total as u64;
        Self {
            total_seconds: total,
            hours: whole / 3600,
            minutes: (whole % 3600) / 60,
            seconds: whole % 60,
            millis: ((total - whole as f64) * 1000.0).round() as u64,
        }
    }

    /// Format as `HH:MM:SS`, or `HH:MM:SS.mmm` with `include_millis`.
    pub fn as_timestamp(&self, include_millis: bool) -> String {
        let base = format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds);
        if include_millis {
            format!("{}.{:03}", base, self.millis)
        } else {
            base
        }
    }

    /// Format as a Twitch VOD link time fragment, e.g. `1h4m32s`.
    pub fn as_link_fragment(&self) -> String {
        format!("{}h{}m{}s", self.hours, self.minutes, self.seconds)
    }
}
