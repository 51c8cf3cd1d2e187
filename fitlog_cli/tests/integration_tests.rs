//! Integration tests for the fitlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Logging and backfilling exercises
//! - Day merging and ordering in the stored file
//! - History rendering
//! - Seed modes

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitlog"))
}

/// Parse the stored history file into a JSON value
fn read_history(data_dir: &Path) -> serde_json::Value {
    let contents =
        fs::read_to_string(data_dir.join("history.json")).expect("Failed to read history");
    serde_json::from_str(&contents).expect("History is not valid JSON")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal exercise history tracker"));
}

#[test]
fn test_log_creates_history_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("log")
        .arg("Squat")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Squat"));

    let history = read_history(&data_dir);
    let days = history.as_array().expect("top level is a sequence");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0][2][0], "Squat");
}

#[test]
fn test_same_day_logs_merge_into_one_record() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    for name in ["Squat", "Burpee", "Squat"] {
        cli()
            .arg("log")
            .arg(name)
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    let history = read_history(&data_dir);
    let days = history.as_array().unwrap();
    assert_eq!(days.len(), 1);

    let exercises = days[0][2].as_array().unwrap();
    assert_eq!(exercises.len(), 3);
    assert_eq!(exercises[0], "Squat");
    assert_eq!(exercises[1], "Burpee");
    assert_eq!(exercises[2], "Squat");
}

#[test]
fn test_backfill_keeps_history_ordered() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    for (date, name) in [
        ("2024-01-05", "Squat"),
        ("2024-01-10", "Burpee"),
        ("2024-01-07", "Step Up"),
    ] {
        cli()
            .arg("backfill")
            .arg(date)
            .arg(name)
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    let history = read_history(&data_dir);
    let days = history.as_array().unwrap();
    assert_eq!(days.len(), 3);

    // Stored dates are RFC 3339; the leading ten characters are the day
    let stored_days: Vec<&str> = days
        .iter()
        .map(|d| &d[1].as_str().unwrap()[..10])
        .collect();
    assert_eq!(stored_days, vec!["2024-01-10", "2024-01-07", "2024-01-05"]);
}

#[test]
fn test_backfill_same_day_merges() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    for name in ["Squat", "Sun Salute"] {
        cli()
            .arg("backfill")
            .arg("2024-01-05")
            .arg(name)
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    let history = read_history(&data_dir);
    let days = history.as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0][2].as_array().unwrap().len(), 2);
}

#[test]
fn test_show_renders_unique_counts() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    for name in ["Squat", "Burpee", "Squat"] {
        cli()
            .arg("log")
            .arg(name)
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    cli()
        .arg("show")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Squat x2"))
        .stdout(predicate::str::contains("Burpee x1"));
}

#[test]
fn test_show_without_history() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("show")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises recorded yet."));
}

#[test]
fn test_empty_exercise_name_rejected() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("log")
        .arg("   ")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exercise name is empty"));
}

#[test]
fn test_demo_seed_is_not_persisted() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("show")
        .arg("--seed")
        .arg("demo")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Squat"));

    assert!(!data_dir.join("history.json").exists());
}

#[test]
fn test_fixture_seed_is_persisted() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("show")
        .arg("--seed")
        .arg("fixture")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    assert!(data_dir.join("history.json").exists());
}

#[test]
fn test_unknown_seed_mode_rejected() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("show")
        .arg("--seed")
        .arg("everything")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown seed mode"));
}

#[test]
fn test_history_persists_across_invocations() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("log")
        .arg("Sun Salute")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .arg("show")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun Salute x1"));
}
