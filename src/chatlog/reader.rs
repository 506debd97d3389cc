//! Chat log file parser.
//!
//! Parses plain-text VOD chat logs from file paths, readers, and strings.
//! Each message is one line in the format:
//!
//! ```text
//! [HH:MM:SS.mmm] author: text
//! ```
//!
//! Lines that do not match the pattern (platform notices, truncated tail
//! lines) are skipped rather than treated as errors - logs captured from
//! live chat routinely contain noise.
//!
//! # Error Handling
//!
//! - File I/O errors include the file path
//! - A log with decreasing timestamps is rejected with the offending line
//! - Malformed individual lines are skipped, never fatal
//!
//! # Example
//!
//! ```no_run
//! use vodscope::ChatLog;
//!
//! let log = ChatLog::parse("2312345678.txt")?;
//! println!("{} messages over {:.0}s", log.len(), log.duration());
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use super::types::{ChatLog, Message};

impl Message {
    /// Parse a message from one log line.
    ///
    /// Expects `[HH:MM:SS.mmm] author: text`. Returns `None` for lines that
    /// do not match; callers treat those as skippable noise.
    pub fn from_line(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('[')?;
        let (stamp, rest) = rest.split_once("] ")?;
        let time = parse_timestamp(stamp)?;
        let (author, text) = rest.split_once(": ")?;
        if author.is_empty() || !author.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_') {
            return None;
        }
        Some(Message::new(time, author, text))
    }
}

/// Parse a `HH:MM:SS.mmm` (or `MM:SS`, or bare seconds) stamp into seconds.
fn parse_timestamp(stamp: &str) -> Option<f64> {
    let (clock, millis) = match stamp.split_once('.') {
        Some((clock, frac)) => (clock, format!("0.{}", frac).parse::<f64>().ok()?),
        None => (stamp, 0.0),
    };
    // At most hours:minutes:seconds; more fields is not a timestamp.
    if clock.split(':').count() > 3 {
        return None;
    }
    let mut total = 0.0_f64;
    for part in clock.split(':') {
        let value: u64 = part.parse().ok()?;
        total = total * 60.0 + value as f64;
    }
    Some(total + millis)
}

impl ChatLog {
    /// Parse a chat log from a filesystem path.
    ///
    /// The VOD id is taken from the file stem when it is numeric (logs are
    /// conventionally named `<vod_id>.txt`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the log's
    /// timestamps are out of order.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open chat log: {}", path.display()))?;
        let vod_id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
            .map(String::from);
        let mut log = Self::parse_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse chat log: {}", path.display()))?;
        log.vod_id = vod_id;
        Ok(log)
    }

    /// Parse a chat log from any buffered reader.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut log = ChatLog::new(None);
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read log line {}", line_no + 1))?;
            let Some(msg) = Message::from_line(line.trim_end()) else {
                continue;
            };
            if let Some(prev) = log.messages.last() {
                if msg.time < prev.time {
                    return Err(crate::error::LogError::TimestampOrder {
                        index: log.messages.len(),
                        time: msg.time,
                        prev: prev.time,
                    })
                    .with_context(|| format!("Log line {}", line_no + 1));
                }
            }
            log.messages.push(msg);
        }
        Ok(log)
    }

    /// Parse a chat log from an in-memory string.
    pub fn parse_str(content: &str) -> Result<Self> {
        Self::parse_reader(content.as_bytes())
    }

    /// Annotate every message with emotes from a known-name set.
    pub fn annotate_emotes<S: std::hash::BuildHasher>(&mut self, known: &HashSet<String, S>) {
        for msg in &mut self.messages {
            msg.annotate_emotes(known);
        }
    }
}

/// Load a known-emote name set from a JSON array file.
///
/// The file is a flat JSON array of emote names, e.g. `["Kappa","PogChamp"]`.
pub fn load_emote_names<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read emote file: {}", path.display()))?;
    let names: Vec<String> = serde_json::from_str(&contents)
        .with_context(|| format!("Emote file must be a JSON array of names: {}", path.display()))?;
    Ok(names.into_iter().collect())
}
