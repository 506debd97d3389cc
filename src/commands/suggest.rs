//! Suggest command handler

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use vodscope::chatlog::load_emote_names;
use vodscope::suggest::CandidateKind;
use vodscope::{suggest, ChatLog, Config, Exclusions, Stoplist};

use super::load_presets;

/// Options for one suggest run, assembled from CLI arguments.
pub struct SuggestArgs {
    pub logs: Vec<PathBuf>,
    pub preset: String,
    pub channel: Option<String>,
    pub top: Option<usize>,
    pub stoplist: Option<PathBuf>,
    pub hidden: Option<PathBuf>,
    pub emotes: Option<PathBuf>,
}

/// Mine chat logs for candidate preset terms.
pub fn handle(args: SuggestArgs) -> Result<()> {
    let config = Config::load()?;
    let store = load_presets(args.channel.as_deref())?;
    let Some(preset) = store.get(&args.preset) else {
        bail!(
            "Unknown preset '{}'; available: {}",
            args.preset,
            store.names().join(", ")
        );
    };

    let stoplist = load_stoplist(&args, &config)?;
    let known_emotes = match args.emotes.as_ref().or(config.analysis.emote_file.as_ref()) {
        Some(path) => load_emote_names(path)?,
        None => Default::default(),
    };
    let exclusions = Exclusions::new(
        config.exclusions.bots.clone(),
        config.exclusions.command_prefixes.clone(),
    );

    let mut filtered_logs = Vec::with_capacity(args.logs.len());
    for path in &args.logs {
        let mut log = ChatLog::parse(path)?;
        log.annotate_emotes(&known_emotes);
        filtered_logs.push(exclusions.filter(&log));
    }

    let top = args.top.unwrap_or(config.suggest.count);
    let candidates = suggest(&filtered_logs, preset, &stoplist, top);

    if candidates.is_empty() {
        println!("No term candidates found.");
        return Ok(());
    }
    println!(
        "Top {} term candidates ({} logs, preset \"{}\"):",
        candidates.len(),
        filtered_logs.len(),
        preset.name
    );
    for (rank, candidate) in candidates.iter().enumerate() {
        let kind = match candidate.kind {
            CandidateKind::Emote => "emote",
            CandidateKind::Token => "word",
        };
        println!(
            "{:3}. {} ({}, {}x) e.g. \"{}\"",
            rank + 1,
            candidate.term,
            kind,
            candidate.count,
            candidate.sample
        );
    }
    Ok(())
}

/// Assemble the stoplist from CLI paths, falling back to configured files.
fn load_stoplist(args: &SuggestArgs, config: &Config) -> Result<Stoplist> {
    let common = read_optional(args.stoplist.as_ref().or(config.suggest.stoplist_file.as_ref()))?;
    let hidden = read_optional(args.hidden.as_ref().or(config.suggest.hidden_file.as_ref()))?;
    Ok(Stoplist::from_words(&common, &hidden))
}

fn read_optional(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list: {}", path.display())),
        None => Ok(String::new()),
    }
}
