use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Nothing listens here, so any request that leaves the client fails to connect.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn kanban_sync() -> Command {
    let mut cmd = Command::cargo_bin("kanban-sync").unwrap();
    cmd.env_remove("KANBAN_USER")
        .env_remove("KANBAN_API_URL")
        .env_remove("KANBAN_DEBUG_LOG");
    cmd
}

fn parse_error(stderr: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stderr);
    let line = text
        .lines()
        .rev()
        .find(|l| l.starts_with('{'))
        .expect("no JSON envelope on stderr");
    serde_json::from_str(line).expect("Failed to parse JSON output")
}

#[test]
fn test_help_lists_commands() {
    kanban_sync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-board"))
        .stdout(predicate::str::contains("move"))
        .stdout(predicate::str::contains("logs"));
}

#[test]
fn test_user_is_required() {
    let output = kanban_sync()
        .args(["--api-url", UNREACHABLE, "boards"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let json = parse_error(&output);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("--user"));
}

#[test]
fn test_user_from_environment() {
    let output = kanban_sync()
        .env("KANBAN_USER", "alice")
        .env("KANBAN_API_URL", UNREACHABLE)
        .arg("boards")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let json = parse_error(&output);
    assert!(json["error"].as_str().unwrap().contains("Connection error"));
}

#[test]
fn test_blank_board_name_rejected_locally() {
    let output = kanban_sync()
        .args([
            "--api-url",
            UNREACHABLE,
            "--user",
            "alice",
            "create-board",
            "--name",
            "   ",
        ])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let json = parse_error(&output);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("Board name is required"));
    assert!(!error.contains("Connection"));
}

#[test]
fn test_long_card_title_rejected_locally() {
    let title = "x".repeat(101);
    let output = kanban_sync()
        .args([
            "--api-url",
            UNREACHABLE,
            "--user",
            "alice",
            "create-card",
            "--board",
            "6f1c2b9e-1d2a-4e55-9a53-3c4a8f0e7b11",
            "--list",
            "0b7d5c1a-5e9f-4b7a-8c2d-9e1f3a4b5c6d",
            "--title",
            &title,
        ])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let json = parse_error(&output);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("at most 100 characters"));
}

#[test]
fn test_invalid_board_id_is_a_usage_error() {
    kanban_sync()
        .args(["--user", "alice", "show", "--board", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}
