//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::json;

use issue_lens::cassette::recorder::CassetteRecorder;

fn run_issue_lens(args: &[&str], replay: Option<&Path>) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_issue-lens");
    let mut command = Command::new(bin);
    command
        .args(args)
        .env_remove("ISSUE_LENS_BASE_URL")
        .env_remove("ISSUE_LENS_RECORD")
        .env_remove("ISSUE_LENS_REPLAY")
        .env_remove("RUST_LOG");
    if let Some(path) = replay {
        command.env("ISSUE_LENS_REPLAY", path);
    }
    command.output().expect("failed to run issue-lens binary")
}

fn cassette(name: &str, output: serde_json::Value) -> PathBuf {
    let dir = std::env::temp_dir().join("issue_lens_cli_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{name}.cassette.yaml"));
    let mut recorder = CassetteRecorder::new(&path, name, "http://127.0.0.1:8000");
    recorder.record(
        "analysis",
        "analyze",
        json!({"repo_url": "https://github.com/facebook/react", "issue_number": 30000}),
        output,
    );
    recorder.save().unwrap()
}

#[test]
fn sample_subcommand_prints_example_inputs() {
    let output = run_issue_lens(&["sample"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("https://github.com/facebook/react"));
    assert!(stdout.contains("30000"));
}

#[test]
fn analyze_without_inputs_fails_validation() {
    let output = run_issue_lens(&["analyze"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Please provide both a repository URL and an issue number."));
}

#[test]
fn analyze_help_shows_usage() {
    let output = run_issue_lens(&["analyze", "--help"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--repo-url"));
    assert!(stdout.contains("--issue"));
}

#[test]
fn analyze_renders_replayed_analysis() {
    let body = json!({
        "summary": "useEffect cleanup runs twice",
        "type": "bug",
        "priority_score": "2",
        "suggested_labels": ["bug", "hooks"],
        "potential_impact": "StrictMode users"
    });
    let path = cassette(
        "replayed_success",
        json!({"Ok": {"status": 200, "body": body.to_string()}}),
    );

    let output = run_issue_lens(&["analyze", "--sample"], Some(&path));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stdout.contains("useEffect cleanup runs twice"));
    assert!(stdout.contains("[bug] [hooks]"));
    assert!(stderr.contains("Working on it..."));
}

#[test]
fn analyze_reports_backend_detail() {
    let path = cassette(
        "replayed_detail",
        json!({"Ok": {"status": 400, "body": "{\"detail\": \"Issue not found\"}"}}),
    );

    let output = run_issue_lens(&["analyze", "--sample"], Some(&path));
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Issue not found"));
}

#[test]
fn analyze_reports_unreachable_backend() {
    let path = cassette("replayed_transport", json!({"Err": "connection refused"}));

    let output = run_issue_lens(&["analyze", "--sample", "--format", "json"], Some(&path));
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("Failed to reach backend."));
}

#[test]
fn invalid_base_url_is_rejected() {
    let output = run_issue_lens(&["health", "--base-url", "ftp://example.com"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unsupported scheme"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_issue_lens(&["nonsense"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
