//! End-to-end tests for `vodscope analyze`

use predicates::prelude::*;

use crate::helpers::{setup_home, vodscope, write_channel_presets, write_log, BASIC_PRESETS};

const BURST_LOG: &str = "\
[00:00:01.000] alice: gg
[00:00:02.500] bob: that was gg
[00:00:03.000] carol: gg wp
[00:10:00.000] dave: quiet part
";

#[test]
fn analyze_reports_a_scored_highlight() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "123456.txt", BURST_LOG);

    vodscope(&home)
        .args(["analyze", "--preset", "hype"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Top \"hype\" moments in 123456.txt:"))
        .stdout(predicate::str::contains("score 3.0 [gg] (3 messages)"))
        .stdout(predicate::str::contains(
            "https://www.twitch.tv/videos/123456?t=0h0m0s",
        ));
}

#[test]
fn analyze_without_matches_prints_a_notice() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "123456.txt", "[00:00:01.000] alice: hello there\n");

    vodscope(&home)
        .args(["analyze", "--preset", "hype"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("No \"hype\" moments found"));
}

#[test]
fn analyze_threshold_override_suppresses_results() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "123456.txt", BURST_LOG);

    vodscope(&home)
        .args(["analyze", "--preset", "hype", "--threshold", "100"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("No \"hype\" moments found"));
}

#[test]
fn analyze_drops_commands_and_bots() {
    let home = setup_home(BASIC_PRESETS);
    // The command message matches the term but must not count.
    let log = write_log(
        &home,
        "123456.txt",
        "\
[00:00:01.000] alice: gg
[00:00:02.000] bob: gg
[00:00:03.000] carol: !gg
",
    );

    vodscope(&home)
        .args(["analyze", "--preset", "hype"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("score 2.0 [gg] (2 messages)"));
}

#[test]
fn analyze_scores_with_a_builtin_metric() {
    let home = setup_home(BASIC_PRESETS);
    // Five copies of one message in the first window: spam score
    // 5^2 / (2 * 1^1.1) = 13 after rounding, above the default threshold.
    let log = write_log(
        &home,
        "123456.txt",
        "\
[00:00:01.000] alice: W
[00:00:02.000] bob: W
[00:00:03.000] carol: W
[00:00:04.000] dave: W
[00:00:05.000] eve: W
[00:10:00.000] frank: that was something
",
    );

    vodscope(&home)
        .args(["analyze", "--metric", "spam"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Top \"spam\" moments in 123456.txt:"))
        .stdout(predicate::str::contains("score 13.0 [spam] (5 messages)"));
}

#[test]
fn analyze_rejects_unknown_preset() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "123456.txt", BURST_LOG);

    vodscope(&home)
        .args(["analyze", "--preset", "nope"])
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset 'nope'"))
        .stderr(predicate::str::contains("hype"));
}

#[test]
fn analyze_rejects_invalid_window_override() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "123456.txt", BURST_LOG);

    vodscope(&home)
        .args(["analyze", "--preset", "hype", "--window", "0"])
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("window length"));
}

#[test]
fn analyze_rejects_unsorted_log() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(
        &home,
        "123456.txt",
        "\
[00:00:10.000] alice: gg
[00:00:05.000] bob: gg
",
    );

    vodscope(&home)
        .args(["analyze", "--preset", "hype"])
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("chronological order"));
}

#[test]
fn analyze_uses_channel_presets_when_given() {
    let home = setup_home(BASIC_PRESETS);
    write_channel_presets(
        &home,
        "somechannel",
        r#"
[raid]
threshold = 1.0
terms = [{ pattern = "raid" }]
"#,
    );
    let log = write_log(&home, "123456.txt", "[00:00:01.000] alice: raid hype\n");

    vodscope(&home)
        .args([
            "analyze",
            "--preset",
            "raid",
            "--channel",
            "somechannel",
        ])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Top \"raid\" moments"));
}

#[test]
fn analyze_writes_an_export_file() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "123456.txt", BURST_LOG);
    let out = home.path().join("report.txt");

    vodscope(&home)
        .args(["analyze", "--preset", "hype", "--output"])
        .arg(&out)
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).expect("report file should exist");
    assert!(contents.starts_with("# vodscope report - generated "));
    assert!(contents.contains("score 3.0 [gg]"));
}
