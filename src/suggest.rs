//! Term suggestion mining.
//!
//! Offline routine that scans one or more filtered logs for high-frequency
//! tokens and emotes not already covered by a preset, to bootstrap new
//! presets. Output is advisory: candidates are shown to a human, never
//! written back to a preset.
//!
//! Channel vocabularies drift (new emotes, new in-jokes), so the stoplist
//! of common words and the user's hidden-term list are external inputs,
//! not built in.

use std::collections::{HashMap, HashSet};

use deunicode::deunicode;

use crate::chatlog::ChatLog;
use crate::preset::Preset;

/// What kind of candidate a suggestion is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// A plain text token (counted case-insensitively).
    Token,
    /// An annotated emote (counted case-sensitively).
    Emote,
}

/// One suggested preset term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermCandidate {
    /// The candidate term, lowercased for tokens, verbatim for emotes.
    pub term: String,

    /// Token or emote.
    pub kind: CandidateKind,

    /// Total occurrences across all supplied logs.
    pub count: u64,

    /// One example message containing the term, for human review.
    pub sample: String,
}

/// External word lists excluded from suggestions.
#[derive(Debug, Clone, Default)]
pub struct Stoplist {
    /// Common words (the `common_eng.txt` style list), lowercase.
    pub common: HashSet<String>,

    /// Terms the user has explicitly hidden from suggestions.
    pub hidden: HashSet<String>,
}

impl Stoplist {
    /// Build a stoplist from newline-delimited word list contents.
    pub fn from_words(common: &str, hidden: &str) -> Self {
        Self {
            common: common
                .lines()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            hidden: hidden
                .lines()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    fn blocks(&self, term: &str) -> bool {
        self.common.contains(&term.to_lowercase()) || self.hidden.contains(term)
    }
}

const MAX_SAMPLE_LEN: usize = 80;

/// Mine candidate preset terms from filtered logs.
///
/// Tokens are counted case-insensitively across all logs; emote
/// annotations are counted case-sensitively and separately, so an emote
/// and an identically spelled word stay distinct candidates. Tokens
/// already present as a pattern in `existing`, stoplisted, hidden,
/// shorter than two characters, or purely numeric are excluded. Returns
/// the top `top_n` candidates by descending count, ties lexicographic.
pub fn suggest(
    logs: &[ChatLog],
    existing: &Preset,
    stoplist: &Stoplist,
    top_n: usize,
) -> Vec<TermCandidate> {
    let existing_patterns: HashSet<String> = existing
        .terms
        .iter()
        .map(|t| t.pattern.to_lowercase())
        .collect();

    let mut tokens: HashMap<String, (u64, String)> = HashMap::new();
    let mut emotes: HashMap<String, (u64, String)> = HashMap::new();

    for log in logs {
        for msg in &log.messages {
            let emote_names: HashSet<&str> =
                msg.emotes.iter().map(|e| e.name.as_str()).collect();
            for emote in &msg.emotes {
                if existing_patterns.contains(&emote.name.to_lowercase())
                    || stoplist.blocks(&emote.name)
                {
                    continue;
                }
                let entry = emotes
                    .entry(emote.name.clone())
                    .or_insert_with(|| (0, snippet(&msg.text)));
                entry.0 += emote.count as u64;
            }
            for raw in msg.text.split_whitespace() {
                // Emote occurrences are counted above; do not double up.
                if emote_names.contains(raw) {
                    continue;
                }
                let Some(token) = normalize_token(raw) else {
                    continue;
                };
                if existing_patterns.contains(&token) || stoplist.blocks(&token) {
                    continue;
                }
                let entry = tokens
                    .entry(token)
                    .or_insert_with(|| (0, snippet(&msg.text)));
                entry.0 += 1;
            }
        }
    }

    let mut candidates: Vec<TermCandidate> = tokens
        .into_iter()
        .map(|(term, (count, sample))| TermCandidate {
            term,
            kind: CandidateKind::Token,
            count,
            sample,
        })
        .chain(emotes.into_iter().map(|(term, (count, sample))| TermCandidate {
            term,
            kind: CandidateKind::Emote,
            count,
            sample,
        }))
        .collect();

    candidates.sort_by(|a, b| b.count.cmp(&a.count).then(a.term.cmp(&b.term)));
    candidates.truncate(top_n);
    tracing::debug!(candidates = candidates.len(), "term mining complete");
    candidates
}

/// Normalize a raw whitespace token into a countable term.
///
/// Transliterates to ASCII, strips surrounding punctuation, lowercases.
/// Returns `None` for trivia: empty results, single characters, and pure
/// numbers.
fn normalize_token(raw: &str) -> Option<String> {
    let ascii = deunicode(raw);
    let trimmed = ascii.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.chars().count() < 2 {
        return None;
    }
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Trim a message to a display-safe sample snippet.
fn snippet(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_SAMPLE_LEN {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_SAMPLE_LEN).collect();
    format!("{}...", cut.trim_end())
}
