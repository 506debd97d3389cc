//! vodscope library
//!
//! Finds interesting timestamps in VOD chat logs: windowed activity
//! scoring against reusable presets, plus frequency mining of candidate
//! preset terms from historical logs.

pub mod analyzer;
pub mod chatlog;
pub mod config;
pub mod error;
pub mod filter;
pub mod preset;
pub mod report;
pub mod suggest;

pub use analyzer::{analyze, analyze_activity, analyze_with, ActivityMetric, Highlight};
pub use chatlog::{ChatLog, EmoteRef, Message, Timecode};
pub use config::Config;
pub use error::{AnalyzeError, LogError, PresetError};
pub use filter::Exclusions;
pub use preset::{MatchMode, Preset, PresetStore, PresetTerm, Scorer, WindowParams};
pub use suggest::{suggest, Stoplist, TermCandidate};
