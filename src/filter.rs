//! Message exclusion pipeline.
//!
//! Removes messages from consideration before analysis: known bots,
//! command-prefixed messages, and platform system messages. Every check is
//! a per-message predicate with no cross-message state, so filtering is
//! deterministic and order-preserving.
//!
//! # Example
//!
//! ```
//! use vodscope::{ChatLog, Exclusions, Message};
//!
//! let mut log = ChatLog::new(None);
//! log.messages.push(Message::new(0.0, "nightbot", "GO GO GO"));
//! log.messages.push(Message::new(1.0, "viewer", "!uptime"));
//! log.messages.push(Message::new(2.0, "viewer", "hello"));
//!
//! let exclusions = Exclusions::new(["nightbot"], ["!"]);
//! let filtered = exclusions.filter(&log);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.messages[0].text, "hello");
//! ```

use std::collections::HashSet;

use crate::chatlog::{ChatLog, Message};

/// Keywords Twitch uses in subscription notices stored as chat messages.
const SUBSCRIPTION_TERMS: [&str; 6] = [
    "subscribed",
    "gifted",
    "gifting",
    "paying",
    "continuing",
    "converted",
];

/// Exclusion data for one analysis run.
///
/// Bot names and command prefixes are supplied externally and read-only
/// for the duration of the run.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    /// Author identifiers to drop entirely (compared case-insensitively).
    pub bots: HashSet<String>,

    /// Prefixes marking chat commands, e.g. `!`.
    pub command_prefixes: Vec<String>,
}

impl Exclusions {
    /// Create exclusions from bot names and command prefixes.
    pub fn new<B, P>(bots: B, prefixes: P) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            bots: bots.into_iter().map(|b| b.into().to_lowercase()).collect(),
            command_prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a single message should be excluded.
    pub fn excludes(&self, msg: &Message) -> bool {
        self.bots.contains(&msg.author.to_lowercase())
            || msg.is_command(&self.command_prefixes)
            || is_subscription_message(&msg.author, &msg.text)
    }

    /// Produce a copy of the log with excluded messages removed.
    ///
    /// Order is preserved; an empty log filters to an empty log.
    pub fn filter(&self, log: &ChatLog) -> ChatLog {
        let messages: Vec<Message> = log
            .messages
            .iter()
            .filter(|m| !self.excludes(m))
            .cloned()
            .collect();
        tracing::debug!(
            kept = messages.len(),
            dropped = log.len() - messages.len(),
            "filtered chat log"
        );
        ChatLog {
            vod_id: log.vod_id.clone(),
            messages,
        }
    }
}

/// Check whether a message is a Twitch subscription system message.
///
/// Twitch stores these as regular chat lines in VOD replays with a
/// predictable shape: the message starts with the author's own name,
/// contains a subscription keyword, and ends in punctuation, e.g.
/// `username: UserName subscribed with Prime.`
pub fn is_subscription_message(author: &str, text: &str) -> bool {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return false;
    };
    if !first.eq_ignore_ascii_case(author) {
        return false;
    }
    let has_sub_term = text
        .split_whitespace()
        .any(|w| SUBSCRIPTION_TERMS.contains(&w));
    has_sub_term && (text.contains('.') || text.contains('!'))
}
