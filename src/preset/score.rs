//! Message scoring against a preset.
//!
//! Scoring is a pure function of one message and one preset: no state, no
//! mutation, total over arbitrary message content. The [`Scorer`] trait is
//! the seam for channel-specific scoring plugins - a plugin is an injected
//! value implementing the same contract, never dynamically loaded code.

use crate::chatlog::Message;

use super::types::{MatchMode, Preset};

/// Result of scoring one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageScore {
    /// Sum of all term contributions.
    pub total: f64,

    /// Per-term contributions as `(term index, contribution)` pairs, in
    /// term declaration order. A message may match multiple terms.
    pub contributions: Vec<(usize, f64)>,
}

impl MessageScore {
    /// Indices of the terms that matched.
    pub fn matched_terms(&self) -> Vec<usize> {
        self.contributions.iter().map(|&(i, _)| i).collect()
    }
}

/// Anything that can score a message and name its terms.
///
/// [`Preset`] is the standard implementation; per-channel scoring plugins
/// implement the same trait and plug into the analyzer unchanged.
pub trait Scorer {
    /// Score a single message. Pure: must not mutate anything.
    fn score(&self, msg: &Message) -> MessageScore;

    /// Human-readable label for a term index, used in result labels.
    fn term_label(&self, index: usize) -> &str;
}

impl Scorer for Preset {
    fn score(&self, msg: &Message) -> MessageScore {
        let mut score = MessageScore::default();
        for (index, term) in self.terms.iter().enumerate() {
            let contribution = match term.mode {
                MatchMode::Exact => {
                    if has_exact_token(&msg.text, &term.pattern) {
                        term.weight
                    } else {
                        0.0
                    }
                }
                MatchMode::Substring => {
                    if msg.text.to_lowercase().contains(&term.pattern.to_lowercase()) {
                        term.weight
                    } else {
                        0.0
                    }
                }
                MatchMode::Emote => msg
                    .emotes
                    .iter()
                    .find(|e| e.name == term.pattern)
                    .map(|e| term.weight * e.count as f64)
                    .unwrap_or(0.0),
            };
            if contribution > 0.0 {
                score.total += contribution;
                score.contributions.push((index, contribution));
            }
        }
        score
    }

    fn term_label(&self, index: usize) -> &str {
        self.terms
            .get(index)
            .map(|t| t.pattern.as_str())
            .unwrap_or("")
    }
}

/// Check for a whitespace/punctuation-delimited token equal to `pattern`,
/// case-insensitively.
fn has_exact_token(text: &str, pattern: &str) -> bool {
    let pattern = pattern.to_lowercase();
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .any(|t| t.to_lowercase() == pattern)
}
