// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that take a range description.

use clap::Args;

/// The range description every issue command starts from.
#[derive(Args, Clone, Debug, Default)]
pub struct RangeArgs {
    /// Range description, e.g. "150", "1-20, 22+" or "-1, 1a, 3-5"
    #[arg(allow_hyphen_values = true, value_name = "RANGES")]
    pub ranges: String,

    /// Fail if any token cannot be parsed (default from config)
    #[arg(long)]
    pub strict: bool,
}

/// Which issues to mark as owned.
#[derive(Args, Clone, Debug, Default)]
pub struct OwnedArgs {
    /// Mark these issues owned, e.g. "1-12, 15"
    #[arg(long, allow_hyphen_values = true, value_name = "SEL")]
    pub owned: Option<String>,

    /// Mark every issue owned
    #[arg(long, conflicts_with = "owned")]
    pub all_owned: bool,
}
