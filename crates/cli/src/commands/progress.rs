// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `longbox progress`: owned versus known issues.

use std::io::Write;

use crate::cli::{OwnedArgs, RangeArgs};
use crate::config::Config;
use crate::error::Result;

use super::load_issues;

pub fn run(range: RangeArgs, owned: OwnedArgs, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    run_impl(&range, &owned, config, &mut stdout.lock())
}

pub(crate) fn run_impl(
    range: &RangeArgs,
    owned: &OwnedArgs,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let set = load_issues(range, owned, config)?;
    writeln!(out, "{}", set.progress())?;
    Ok(())
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
