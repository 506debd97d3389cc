//! Text rendering for analysis results.
//!
//! Turns a ranked highlight list into the report lines shown on stdout or
//! written to an export file. The engine itself makes no assumptions about
//! rendering; everything presentational lives here.
//!
//! # Output Shape
//!
//! ```text
//! Top "hype" moments in 2312345678.txt:
//!  1. 754s (00:12:34) score 41.0 [gg] (23 messages) - https://www.twitch.tv/videos/2312345678?t=0h12m34s
//! ```

use chrono::Local;

use crate::analyzer::Highlight;
use crate::chatlog::ChatLog;

/// Render a full report for one analysis run.
///
/// `limit` caps the number of result lines; the original ranking order is
/// preserved. A VOD link column appears only when the log carries a VOD id.
pub fn render(log: &ChatLog, preset_name: &str, highlights: &[Highlight], limit: usize) -> String {
    let source = log
        .vod_id
        .as_ref()
        .map(|id| format!("{}.txt", id))
        .unwrap_or_else(|| "chat log".to_string());

    if highlights.is_empty() {
        return format!("No \"{}\" moments found in {}.\n", preset_name, source);
    }

    let mut out = format!("Top \"{}\" moments in {}:\n", preset_name, source);
    for (rank, highlight) in highlights.iter().take(limit).enumerate() {
        out.push_str(&render_line(rank + 1, highlight, log.vod_id.as_deref()));
        out.push('\n');
    }
    out
}

/// Render one result line.
fn render_line(rank: usize, highlight: &Highlight, vod_id: Option<&str>) -> String {
    let tc = highlight.timecode();
    let mut line = format!(
        "{:2}. {}s ({}) score {:.1}",
        rank,
        highlight.time as u64,
        tc.as_timestamp(false),
        highlight.score,
    );
    if !highlight.label.is_empty() {
        line.push_str(&format!(" [{}]", highlight.label));
    }
    line.push_str(&format!(" ({} messages)", highlight.message_count));
    if let Some(id) = vod_id {
        line.push_str(&format!(
            " - https://www.twitch.tv/videos/{}?t={}",
            id,
            tc.as_link_fragment()
        ));
    }
    line
}

/// Render a report with a generated-at header, for file export.
pub fn render_export(
    log: &ChatLog,
    preset_name: &str,
    highlights: &[Highlight],
    limit: usize,
) -> String {
    format!(
        "# vodscope report - generated {}\n{}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        render(log, preset_name, highlights, limit)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(time: f64, score: f64, label: &str) -> Highlight {
        Highlight {
            time,
            score,
            message_count: 4,
            label: label.into(),
        }
    }

    fn log_with_id(id: Option<&str>) -> ChatLog {
        ChatLog {
            vod_id: id.map(String::from),
            messages: vec![],
        }
    }

    #[test]
    fn renders_links_when_vod_id_known() {
        let report = render(
            &log_with_id(Some("123456")),
            "hype",
            &[highlight(754.0, 41.0, "gg")],
            10,
        );
        assert!(report.contains("754s (00:12:34) score 41.0 [gg]"));
        assert!(report.contains("https://www.twitch.tv/videos/123456?t=0h12m34s"));
    }

    #[test]
    fn omits_links_without_vod_id() {
        let report = render(&log_with_id(None), "hype", &[highlight(10.0, 3.0, "gg")], 10);
        assert!(!report.contains("twitch.tv"));
        assert!(report.contains("chat log"));
    }

    #[test]
    fn respects_result_limit() {
        let highlights: Vec<Highlight> = (0..20)
            .map(|i| highlight(i as f64 * 100.0, 20.0 - i as f64, "gg"))
            .collect();
        let report = render(&log_with_id(None), "hype", &highlights, 5);
        assert_eq!(report.lines().count(), 6); // header + 5 results
    }

    #[test]
    fn empty_results_render_a_notice() {
        let report = render(&log_with_id(Some("9")), "hype", &[], 10);
        assert!(report.contains("No \"hype\" moments found"));
    }

    #[test]
    fn unlabeled_highlights_skip_the_bracket() {
        let report = render(&log_with_id(None), "all", &[highlight(1.0, 2.0, "")], 10);
        assert!(!report.contains("[]"));
    }

    #[test]
    fn export_includes_generated_header() {
        let report = render_export(&log_with_id(None), "hype", &[highlight(1.0, 2.0, "gg")], 10);
        assert!(report.starts_with("# vodscope report - generated "));
    }
}
