//! End-to-end tests for the `news-parser` binary.
//!
//! Runs the compiled binary and checks exit status, stdout and stderr.

#[path = "common/mod.rs"]
mod common;

use std::process::{Command, Output};

use common::{NewsFile, SAMPLE_NEWS};

/// Run the binary with `args`, without inheriting NEWS_FILE or RUST_LOG.
fn news_parser(args: &[&str], news_file: Option<&NewsFile>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_news-parser"));
    cmd.args(args).env_remove("NEWS_FILE").env_remove("RUST_LOG");
    if let Some(file) = news_file {
        cmd.env("NEWS_FILE", file.path());
    }
    cmd.output().expect("Failed to execute news-parser")
}

#[test]
fn test_missing_file_exits_with_error() {
    let file = NewsFile::new(SAMPLE_NEWS);
    let missing = file.missing_path();

    let output = news_parser(&[missing.to_str().unwrap()], None);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Could not load NEWS from"),
        "unexpected stderr: {}",
        stderr
    );
    assert!(stderr.contains("does-not-exist.md"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_file_from_environment() {
    let file = NewsFile::new(SAMPLE_NEWS);

    let output = news_parser(&[], Some(&file));

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Version 9.7.1 \"Pandemonium\" (2016-12-27)"));
    assert!(stdout.contains("Version 0.6.4 (2003-08-07)"));
}

#[test]
fn test_positional_file_wins_over_environment() {
    let from_env = NewsFile::new("# Version 5.0 2024-01-01\n* from env\n");
    let positional = NewsFile::new(SAMPLE_NEWS);
    let path = positional.path();

    let output = news_parser(&[path.to_str().unwrap()], Some(&from_env));

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Version 9.7.1"));
    assert!(!stdout.contains("from env"));
}

#[test]
fn test_release_latest_json() {
    let file = NewsFile::new(SAMPLE_NEWS);
    let path = file.path();

    let output = news_parser(
        &[path.to_str().unwrap(), "--release", "9.7.0", "--latest", "-f", "json"],
        None,
    );

    assert!(output.status.success(), "{:?}", output);
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let releases = json.as_array().expect("top level should be an array");
    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0]["version"], "9.7.0");
    assert_eq!(releases[0]["entries"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_unknown_release_prints_nothing() {
    let file = NewsFile::new(SAMPLE_NEWS);
    let path = file.path();

    let output = news_parser(&[path.to_str().unwrap(), "--release", "1.2.3"], None);

    assert!(output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty());
}
