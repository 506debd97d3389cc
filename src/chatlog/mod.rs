//! In-memory chat log model and log file ingestion.
//!
//! - [`types`] - [`Message`], [`ChatLog`], [`Timecode`]
//! - [`reader`] - plain-text log parsing and emote-set loading

mod reader;
mod types;

pub use reader::load_emote_names;
pub use types::{ChatLog, EmoteRef, Message, Timecode};
