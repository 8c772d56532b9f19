//! CLI integration tests
//!
//! Tests the command-line interface using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for the coach-portraits binary
fn portraits_cmd() -> Command {
    Command::cargo_bin("coach-portraits").unwrap()
}

// ─────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    portraits_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coach Portraits"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    portraits_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("coach-portraits"));
}

// ─────────────────────────────────────────────────────────────────
// List Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_list_command() {
    portraits_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personas:"))
        .stdout(predicate::str::contains("sterling"))
        .stdout(predicate::str::contains("willow"))
        .stdout(predicate::str::contains("kai"))
        .stdout(predicate::str::contains("sparky"))
        .stdout(predicate::str::contains("Expressions:"))
        .stdout(predicate::str::contains("surprised"));
}

#[test]
fn test_list_json() {
    let output = portraits_cmd()
        .arg("list")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(listing["personas"].as_array().unwrap().len(), 4);
    assert_eq!(listing["expressions"].as_array().unwrap().len(), 4);
    assert_eq!(listing["personas"][0]["slug"], "sterling");
    assert_eq!(listing["expressions"][0]["indicator_color"], serde_json::Value::Null);
}

// ─────────────────────────────────────────────────────────────────
// Config Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_show_default() {
    let tmp = TempDir::new().unwrap();
    portraits_cmd()
        .current_dir(tmp.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("assets/images"))
        .stdout(predicate::str::contains("[canvas]"))
        .stdout(predicate::str::contains("size = 200"))
        .stdout(predicate::str::contains("[font]"))
        .stdout(predicate::str::contains("[logging]"));
}

#[test]
fn test_config_show_nonexistent_file() {
    portraits_cmd()
        .arg("config")
        .arg("show")
        .arg("--config")
        .arg("/nonexistent/path/config.toml")
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_config_init_creates_file() {
    let tmp = TempDir::new().unwrap();
    portraits_cmd()
        .current_dir(tmp.path())
        .arg("config")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    assert!(tmp.path().join("coach-portraits.toml").exists());

    // Second init without --force refuses to overwrite.
    portraits_cmd()
        .current_dir(tmp.path())
        .arg("config")
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_size_is_rejected() {
    let tmp = TempDir::new().unwrap();
    portraits_cmd()
        .current_dir(tmp.path())
        .arg("generate")
        .arg("--size")
        .arg("8")
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("at least 32"));
}
