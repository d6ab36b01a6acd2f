//! Tests for error handling and suggestions.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn userforge(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("userforge").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("USERFORGE_CONFIG");
    cmd
}

#[test]
fn test_missing_key_fields_lists_both_violations() {
    let temp = TempDir::new().unwrap();
    userforge(&temp)
        .args(["create", "--age", "30"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("username must not be empty"))
        .stderr(predicate::str::contains("email must not be empty"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_malformed_email_is_rejected() {
    let temp = TempDir::new().unwrap();
    userforge(&temp)
        .args(["create", "--username", "alice", "--email", "invalid"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("email format is invalid"))
        .stderr(predicate::str::contains("email must not be empty").not());
}

#[test]
fn test_whitespace_username_is_blank() {
    let temp = TempDir::new().unwrap();
    userforge(&temp)
        .args(["validate", "--username", "   ", "--email", "a@b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("username must not be empty"));
}

#[test]
fn test_builder_mode_still_validates() {
    let temp = TempDir::new().unwrap();
    userforge(&temp)
        .args(["create", "--mode", "builder", "--username", "alice"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("email must not be empty"));
}

#[test]
fn test_update_that_blanks_email_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("alice.json"),
        r#"{"username":"alice","email":"alice@example.com"}"#,
    )
    .unwrap();

    userforge(&temp)
        .args(["update", "--existing", "alice.json", "--email", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("email must not be empty"));
}

#[test]
fn test_missing_input_file() {
    let temp = TempDir::new().unwrap();
    userforge(&temp)
        .args(["create", "--from", "nope.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_malformed_input_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bad.json"), "{ nope").unwrap();

    userforge(&temp)
        .args(["validate", "--from", "bad.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Could not parse"))
        .stderr(predicate::str::contains("alice@example.com"));
}

#[test]
fn test_missing_explicit_config_file() {
    let temp = TempDir::new().unwrap();
    userforge(&temp)
        .args(["--config", "absent.toml", "demo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_blank_default_in_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("c.toml"), "[defaults]\ncity = \"  \"\n").unwrap();

    userforge(&temp)
        .args(["--config", "c.toml", "create", "--username", "a", "--email", "a@b"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("city"));
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    userforge(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_invalid_arguments_exit_two() {
    let temp = TempDir::new().unwrap();
    userforge(&temp)
        .args(["create", "--age", "old"])
        .assert()
        .code(2);
}

#[test]
fn test_verbose_shows_cause_chain() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bad.json"), "[1, 2]").unwrap();

    userforge(&temp)
        .args(["-v", "validate", "--from", "bad.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Caused by"));
}
