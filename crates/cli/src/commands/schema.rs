// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use std::io::Write;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{grid, parse};
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let stdout = std::io::stdout();
    run_impl(cmd, &mut stdout.lock())
}

pub(crate) fn run_impl(cmd: SchemaCommand, out: &mut impl Write) -> Result<()> {
    let schema = match cmd {
        SchemaCommand::Parse => schema_for!(parse::ParseOutputJson),
        SchemaCommand::Grid => schema_for!(grid::GridOutputJson),
    };

    let json = serde_json::to_string_pretty(&schema)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
