//! Analyze command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use vodscope::chatlog::load_emote_names;
use vodscope::{
    analyze, analyze_activity, report, ActivityMetric, ChatLog, Config, Exclusions, Highlight,
    Preset, WindowParams,
};

use super::load_presets;

/// Options for one analyze run, assembled from CLI arguments.
pub struct AnalyzeArgs {
    pub log: PathBuf,
    pub preset: Option<String>,
    pub metric: Option<ActivityMetric>,
    pub channel: Option<String>,
    pub window: Option<f64>,
    pub step: Option<f64>,
    pub threshold: Option<f64>,
    pub min_gap: Option<f64>,
    pub limit: Option<usize>,
    pub bots: Option<PathBuf>,
    pub emotes: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Analyze a chat log against a preset or a built-in metric and print
/// the report.
pub fn handle(args: AnalyzeArgs) -> Result<()> {
    let config = Config::load()?;

    let preset = match &args.preset {
        Some(name) => {
            let store = load_presets(args.channel.as_deref())?;
            let Some(preset) = store.get(name) else {
                if store.is_empty() {
                    bail!(
                        "No presets found; create {} first",
                        vodscope::config::presets_path()?.display()
                    );
                }
                bail!(
                    "Unknown preset '{}'; available: {}",
                    name,
                    store.names().join(", ")
                );
            };
            Some(apply_overrides(preset.clone(), &args))
        }
        None => None,
    };

    let mut log = ChatLog::parse(&args.log)?;
    let emote_file = args.emotes.as_ref().or(config.analysis.emote_file.as_ref());
    if let Some(path) = emote_file {
        let known = load_emote_names(path)?;
        log.annotate_emotes(&known);
    }

    let mut exclusions = Exclusions::new(
        config.exclusions.bots.clone(),
        config.exclusions.command_prefixes.clone(),
    );
    if let Some(path) = &args.bots {
        for bot in read_word_file(path)? {
            exclusions.bots.insert(bot.to_lowercase());
        }
    }
    let filtered = exclusions.filter(&log);

    let (name, highlights): (&str, Vec<Highlight>) = match (&preset, args.metric) {
        (Some(preset), _) => (&preset.name, analyze(&filtered, preset)?),
        (None, Some(metric)) => {
            let params = metric_params(&config, &args);
            (
                metric.label(),
                analyze_activity(&filtered, &params, metric)?,
            )
        }
        (None, None) => bail!("Either a preset or a metric is required"),
    };

    let limit = args.limit.unwrap_or(config.analysis.result_limit);
    print!("{}", report::render(&filtered, name, &highlights, limit));

    if let Some(path) = &args.output {
        let contents = report::render_export(&filtered, name, &highlights, limit);
        fs::write(path, contents)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

/// Window parameters for a metric run: configured defaults plus CLI
/// overrides.
fn metric_params(config: &Config, args: &AnalyzeArgs) -> WindowParams {
    override_window(config.analysis.window, args)
}

/// Apply CLI parameter overrides on top of the stored preset.
fn apply_overrides(mut preset: Preset, args: &AnalyzeArgs) -> Preset {
    preset.window = override_window(preset.window, args);
    preset
}

/// Apply CLI window overrides to a parameter set.
fn override_window(mut params: WindowParams, args: &AnalyzeArgs) -> WindowParams {
    if let Some(length) = args.window {
        params.length_s = length;
    }
    if let Some(step) = args.step {
        params.step_s = step;
    }
    if let Some(threshold) = args.threshold {
        params.threshold = threshold;
    }
    if let Some(min_gap) = args.min_gap {
        params.min_gap_s = min_gap;
    }
    params
}

/// Read a newline-delimited word file, skipping blanks.
pub fn read_word_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}
