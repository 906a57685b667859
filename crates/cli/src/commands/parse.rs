// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `longbox parse`: expand a range description.

use std::io::Write;

use crate::cli::{OutputFormat, RangeArgs};
use crate::config::Config;
use crate::display::{format_issue_list, format_summary};
use crate::error::Result;
use crate::schema::parse::ParseOutputJson;

use super::parse_ranges;

pub fn run(range: RangeArgs, output: OutputFormat, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    run_impl(&range, output, config, &mut stdout.lock())
}

pub(crate) fn run_impl(
    range: &RangeArgs,
    output: OutputFormat,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = parse_ranges(range, config)?;

    match output {
        OutputFormat::Text => {
            writeln!(out, "{}", format_issue_list(&outcome.issues))?;
            writeln!(out, "{}", format_summary(&outcome.issues))?;
        }
        OutputFormat::Json => {
            let json = ParseOutputJson::from(&outcome);
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
