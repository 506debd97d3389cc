//! End-to-end tests for `vodscope preset` and `vodscope config`

use predicates::prelude::*;

use crate::helpers::{setup_home, vodscope, write_channel_presets, BASIC_PRESETS};

#[test]
fn preset_list_shows_names() {
    let home = setup_home(BASIC_PRESETS);

    vodscope(&home)
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hype"));
}

#[test]
fn preset_list_includes_channel_presets() {
    let home = setup_home(BASIC_PRESETS);
    write_channel_presets(
        &home,
        "somechannel",
        "[raid]\nterms = [{ pattern = \"raid\" }]\n",
    );

    vodscope(&home)
        .args(["preset", "list", "--channel", "somechannel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hype"))
        .stdout(predicate::str::contains("raid"));
}

#[test]
fn preset_show_prints_terms_and_window() {
    let home = setup_home(BASIC_PRESETS);

    vodscope(&home)
        .args(["preset", "show", "hype"])
        .assert()
        .success()
        .stdout(predicate::str::contains("window 30s / step 30s"))
        .stdout(predicate::str::contains("gg (exact, weight 1)"));
}

#[test]
fn preset_show_unknown_name_fails() {
    let home = setup_home(BASIC_PRESETS);

    vodscope(&home)
        .args(["preset", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset 'nope'"));
}

#[test]
fn config_path_points_into_home() {
    let home = setup_home(BASIC_PRESETS);

    vodscope(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/vodscope/config.toml"));
}

#[test]
fn config_show_renders_defaults() {
    let home = setup_home(BASIC_PRESETS);

    vodscope(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[analysis]"))
        .stdout(predicate::str::contains("result_limit = 50"));
}

#[test]
fn config_init_writes_a_default_file() {
    let home = setup_home(BASIC_PRESETS);

    vodscope(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let path = home.path().join(".config/vodscope/config.toml");
    let contents = std::fs::read_to_string(path).expect("config file should exist");
    assert!(contents.contains("result_limit = 50"));

    // A second run must not clobber the file.
    vodscope(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_generate_for_bash() {
    let home = setup_home(BASIC_PRESETS);

    vodscope(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vodscope"));
}
