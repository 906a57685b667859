// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Tests for the public `run()` function.
//!
//! Commands that print to stdout are exercised end to end in
//! `tests/`; here the routing is checked through error paths, which return
//! before any output is written.

use clap::Parser;

use crate::{run, Cli, Error};

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn parse_routes_core_errors() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = temp.path().join("longbox.toml");
    std::fs::write(&config, "").unwrap();
    let config = config.to_str().unwrap();

    let err = run(cli(&["longbox", "parse", "nope", "--config", config])).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(lb_core::Error::NothingParsed { .. })
    ));
}

#[test]
fn key_decode_routes_without_config() {
    let err = run(cli(&[
        "longbox",
        "key",
        "decode",
        "bogus",
        "--config",
        "/nonexistent/longbox.toml",
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::Core(lb_core::Error::InvalidExtraKey(_))));
}

#[test]
fn missing_config_file_is_reported() {
    let err = run(cli(&[
        "longbox",
        "progress",
        "5",
        "--config",
        "/nonexistent/longbox.toml",
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(_)));
}

#[test]
fn invalid_config_is_reported() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = temp.path().join("longbox.toml");
    std::fs::write(&config, "row_width = 0\n").unwrap();

    let err = run(cli(&[
        "longbox",
        "grid",
        "5",
        "--config",
        config.to_str().unwrap(),
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
