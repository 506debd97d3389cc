//! vodscope - CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands, PresetCommands};
use commands::analyze::AnalyzeArgs;
use commands::suggest::SuggestArgs;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            log,
            preset,
            metric,
            channel,
            window,
            step,
            threshold,
            min_gap,
            limit,
            bots,
            emotes,
            output,
        } => commands::analyze::handle(AnalyzeArgs {
            log,
            preset,
            metric: metric.map(Into::into),
            channel,
            window,
            step,
            threshold,
            min_gap,
            limit,
            bots,
            emotes,
            output,
        }),
        Commands::Suggest {
            logs,
            preset,
            channel,
            top,
            stoplist,
            hidden,
            emotes,
        } => commands::suggest::handle(SuggestArgs {
            logs,
            preset,
            channel,
            top,
            stoplist,
            hidden,
            emotes,
        }),
        Commands::Preset(cmd) => match cmd {
            PresetCommands::List { channel } => commands::preset::list(channel.as_deref()),
            PresetCommands::Show { name, channel } => {
                commands::preset::show(&name, channel.as_deref())
            }
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
