//! End-to-end tests for `vodscope suggest`

use predicates::prelude::*;

use crate::helpers::{setup_home, vodscope, write_log, BASIC_PRESETS};

const HISTORY_LOG: &str = "\
[00:00:01.000] alice: pog pog
[00:00:02.000] bob: that was pog
[00:00:03.000] carol: gg the best
[00:00:04.000] dave: the the the
";

#[test]
fn suggest_ranks_frequent_terms() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "111.txt", HISTORY_LOG);

    vodscope(&home)
        .args(["suggest", "--preset", "hype"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("preset \"hype\""))
        .stdout(predicate::str::contains("pog (word, 3x)"));
}

#[test]
fn suggest_excludes_existing_preset_terms() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "111.txt", HISTORY_LOG);

    vodscope(&home)
        .args(["suggest", "--preset", "hype"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("gg (").not());
}

#[test]
fn suggest_honors_a_stoplist_file() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "111.txt", HISTORY_LOG);
    let stoplist = write_log(&home, "common.txt", "the\nthat\nwas\nbest\n");

    vodscope(&home)
        .args(["suggest", "--preset", "hype", "--stoplist"])
        .arg(&stoplist)
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("the (").not())
        .stdout(predicate::str::contains("pog (word, 3x)"));
}

#[test]
fn suggest_counts_across_multiple_logs() {
    let home = setup_home(BASIC_PRESETS);
    let first = write_log(&home, "111.txt", "[00:00:01.000] alice: pog\n");
    let second = write_log(&home, "222.txt", "[00:00:01.000] bob: pog\n");

    vodscope(&home)
        .args(["suggest", "--preset", "hype"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 logs"))
        .stdout(predicate::str::contains("pog (word, 2x)"));
}

#[test]
fn suggest_with_no_candidates_prints_a_notice() {
    let home = setup_home(BASIC_PRESETS);
    let log = write_log(&home, "111.txt", "[00:00:01.000] alice: gg\n");

    vodscope(&home)
        .args(["suggest", "--preset", "hype"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("No term candidates found."));
}

#[test]
fn suggest_requires_a_log_argument() {
    let home = setup_home(BASIC_PRESETS);

    vodscope(&home)
        .args(["suggest", "--preset", "hype"])
        .assert()
        .failure();
}
