// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `longbox key`: copy/variant label and key conversion.

use std::io::Write;

use lb_core::extra_key;

use crate::cli::KeyCommand;
use crate::error::Result;

pub fn run(cmd: KeyCommand) -> Result<()> {
    let stdout = std::io::stdout();
    run_impl(cmd, &mut stdout.lock())
}

pub(crate) fn run_impl(cmd: KeyCommand, out: &mut impl Write) -> Result<()> {
    let converted = match cmd {
        KeyCommand::Encode { label } => extra_key::encode(&label)?,
        KeyCommand::Decode { key } => extra_key::decode(&key)?,
    };
    writeln!(out, "{}", converted)?;
    Ok(())
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
