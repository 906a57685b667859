// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `longbox config`: show the effective configuration.

use std::io::Write;

use crate::config::{Config, ConfigSource};
use crate::error::Result;

pub fn run(config: &Config, source: &ConfigSource) -> Result<()> {
    let stdout = std::io::stdout();
    run_impl(config, source, &mut stdout.lock())
}

pub(crate) fn run_impl(config: &Config, source: &ConfigSource, out: &mut impl Write) -> Result<()> {
    writeln!(out, "# source: {}", source)?;
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
