//! CLI definitions for vodscope
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the command handlers and integration tests can reuse them.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

use vodscope::ActivityMetric;

/// Built-in preset-free metrics selectable with `--metric`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricArg {
    /// Repeated-message pressure
    Spam,
    /// Distinct-message pressure
    Unique,
}

impl From<MetricArg> for ActivityMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Spam => ActivityMetric::Spam,
            MetricArg::Unique => ActivityMetric::Unique,
        }
    }
}

/// Build clap styles using our theme colors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "vodscope")]
#[command(about = "[ vodscope ] - find the interesting moments in VOD chat logs")]
#[command(
    long_about = "vodscope - analyze VOD chat logs for interesting timestamps.

Slides a scoring window across a chat log, scores messages against a
preset of weighted terms and emotes, and reports the time ranges where
chat went off. Also mines historical logs for candidate preset terms.

QUICK START:
    vodscope analyze 2312345678.txt --preset hype
    vodscope suggest *.txt --preset hype --top 30
    vodscope preset list

Presets live in ~/.config/vodscope/presets.toml; per-channel overrides
go in presets.<channel>.toml next to it."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a chat log for interesting timestamps
    #[command(long_about = "Analyze a VOD chat log for interesting timestamps.

Messages from known bots, chat commands, and subscription notices are
excluded, the rest are scored against the chosen preset, and windows
above the preset's threshold are merged and ranked. With --metric the
log is scored by a built-in preset-free activity metric instead.

EXAMPLES:
    vodscope analyze 2312345678.txt --preset hype
    vodscope analyze chat.txt --metric spam
    vodscope analyze chat.txt --preset hype --threshold 6 --min-gap 120
    vodscope analyze chat.txt --preset hype --channel somechannel
    vodscope analyze chat.txt --preset hype --output report.txt")]
    Analyze {
        /// Path to the chat log file
        log: PathBuf,
        /// Preset name to score against
        #[arg(long, short, required_unless_present = "metric", conflicts_with = "metric")]
        preset: Option<String>,
        /// Built-in preset-free metric to score with instead
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,
        /// Channel name, to include per-channel presets
        #[arg(long)]
        channel: Option<String>,
        /// Override the preset's window length (seconds)
        #[arg(long)]
        window: Option<f64>,
        /// Override the preset's window step (seconds)
        #[arg(long)]
        step: Option<f64>,
        /// Override the preset's score threshold
        #[arg(long)]
        threshold: Option<f64>,
        /// Override the preset's minimum gap between results (seconds)
        #[arg(long)]
        min_gap: Option<f64>,
        /// Maximum results to show
        #[arg(long)]
        limit: Option<usize>,
        /// Newline-delimited bot name file (adds to configured bots)
        #[arg(long)]
        bots: Option<PathBuf>,
        /// JSON array file of known emote names
        #[arg(long)]
        emotes: Option<PathBuf>,
        /// Write the report to a file as well as stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Mine logs for candidate preset terms
    #[command(long_about = "Mine one or more chat logs for candidate preset terms.

Counts token and emote frequency across the filtered logs, skipping
terms the preset already has, stoplisted common words, and hidden
terms. Advisory output only - presets are never modified.

EXAMPLES:
    vodscope suggest 2312345678.txt --preset hype
    vodscope suggest logs/*.txt --preset hype --top 30 --stoplist common_eng.txt")]
    Suggest {
        /// Chat log files to mine
        #[arg(required = true)]
        logs: Vec<PathBuf>,
        /// Preset whose terms are excluded from suggestions
        #[arg(long, short)]
        preset: String,
        /// Channel name, to include per-channel presets
        #[arg(long)]
        channel: Option<String>,
        /// Number of candidates to show
        #[arg(long)]
        top: Option<usize>,
        /// Newline-delimited common-word stoplist file
        #[arg(long)]
        stoplist: Option<PathBuf>,
        /// Newline-delimited hidden-term file
        #[arg(long)]
        hidden: Option<PathBuf>,
        /// JSON array file of known emote names
        #[arg(long)]
        emotes: Option<PathBuf>,
    },

    /// Inspect available presets
    #[command(subcommand)]
    Preset(PresetCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate shell completion scripts.

EXAMPLES:
    vodscope completions bash > /etc/bash_completion.d/vodscope
    vodscope completions zsh > ~/.zfunc/_vodscope")]
    Completions {
        /// Shell to generate completions for
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum PresetCommands {
    /// List preset names
    List {
        /// Channel name, to include per-channel presets
        #[arg(long)]
        channel: Option<String>,
    },
    /// Show a preset's terms and parameters
    Show {
        /// Preset name
        name: String,
        /// Channel name, to include per-channel presets
        #[arg(long)]
        channel: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}
