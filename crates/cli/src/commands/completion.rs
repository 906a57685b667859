// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `longbox completion`: shell completion scripts.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;

/// Binary name completions are generated for.
const BIN_NAME: &str = "longbox";

pub fn run(shell: Shell) -> Result<()> {
    let stdout = std::io::stdout();
    run_impl(shell, &mut stdout.lock())
}

pub(crate) fn run_impl(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut *out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
