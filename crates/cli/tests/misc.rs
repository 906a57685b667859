// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;
use similar_asserts::assert_eq;

#[test]
fn key_encode_and_decode() {
    let (_temp, cmd) = longbox();
    assert_eq!(stdout_of(cmd, &["key", "encode", "2nd Copy"]), "copy02\n");

    let (_temp, cmd) = longbox();
    assert_eq!(stdout_of(cmd, &["key", "decode", "variant01"]), "Variant\n");
}

#[test]
fn key_decode_rejects_unknown_category() {
    let (_temp, mut cmd) = longbox();
    cmd.args(["key", "decode", "cover01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid extra key: 'cover01'"));
}

#[test]
fn config_defaults() {
    let (_temp, cmd) = longbox();
    assert_eq!(
        stdout_of(cmd, &["config"]),
        "# source: built-in defaults\nrow_width = 10\nstrict = false\n"
    );
}

#[test]
fn config_from_project_file() {
    let (temp, cmd) = longbox();
    write_config(&temp, "row_width = 5\n");
    let out = stdout_of(cmd, &["config"]);
    assert!(out.contains("(project)"));
    assert!(out.contains("row_width = 5"));
}

#[test]
fn config_env_overrides_project_file() {
    let (temp, mut cmd) = longbox();
    write_config(&temp, "row_width = 5\n");
    let other = temp.path().join("other.toml");
    std::fs::write(&other, "row_width = 7\n").unwrap();

    cmd.env("LONGBOX_CONFIG", &other);
    let out = stdout_of(cmd, &["config"]);
    assert!(out.contains("(LONGBOX_CONFIG)"));
    assert!(out.contains("row_width = 7"));
}

#[test]
fn config_flag_missing_file() {
    let (_temp, mut cmd) = longbox();
    cmd.args(["config", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found: missing.toml"));
}

#[test]
fn config_unknown_key_fails() {
    let (temp, mut cmd) = longbox();
    write_config(&temp, "colour = true\n");
    cmd.arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn schema_parse() {
    let (_temp, cmd) = longbox();
    let out = stdout_of(cmd, &["schema", "parse"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["title"], "ParseOutputJson");
}

#[test]
fn completion_bash() {
    let (_temp, mut cmd) = longbox();
    cmd.args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("longbox"));
}

#[test]
fn help_lists_commands() {
    let (_temp, mut cmd) = longbox();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("grid"))
        .stdout(predicate::str::contains("progress"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let (_temp, mut cmd) = longbox();
    cmd.env("LONGBOX_LOG", "debug")
        .args(["parse", "3"])
        .assert()
        .success()
        .stdout("1-3\n3 issues\n")
        .stderr(predicate::str::contains("parsed ranges"));
}

#[test]
fn timings_go_to_stderr() {
    let (_temp, mut cmd) = longbox();
    cmd.env("LONGBOX_TIMINGS", "1")
        .args(["parse", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[timings] range::parse"));
}
