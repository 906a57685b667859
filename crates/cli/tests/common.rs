// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary, isolated from the caller's config and color settings.
pub fn longbox_in(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("longbox");
    cmd.current_dir(dir.path())
        .env_remove("LONGBOX_CONFIG")
        .env_remove("LONGBOX_LOG")
        .env_remove("LONGBOX_TIMINGS")
        .env_remove("COLOR")
        .env("NO_COLOR", "1")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"));
    cmd
}

/// Run in a fresh empty directory.
pub fn longbox() -> (TempDir, Command) {
    let temp = TempDir::new().unwrap();
    let cmd = longbox_in(&temp);
    (temp, cmd)
}

/// Write `longbox.toml` into the directory.
pub fn write_config(dir: &TempDir, content: &str) {
    std::fs::write(dir.path().join("longbox.toml"), content).unwrap();
}

/// Stdout of a successful run.
pub fn stdout_of(mut cmd: Command, args: &[&str]) -> String {
    let output = cmd.args(args).output().unwrap();
    assert!(
        output.status.success(),
        "longbox {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
