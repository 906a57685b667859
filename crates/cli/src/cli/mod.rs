// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use lb_core::RowWidth;

pub use args::{OwnedArgs, RangeArgs};

/// Parse a grid width that must be at least 1.
fn row_width(s: &str) -> Result<usize, String> {
    let width: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    RowWidth::new(width)
        .map(RowWidth::get)
        .map_err(|_| "must be at least 1".to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "longbox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Issue ranges and collection grids for comic titles")]
#[command(
    long_about = "Issue ranges and collection grids for comic titles.\n\n\
    Expand descriptions like \"1-20, 22+\" into issue lists, lay them out in \
    fixed-width grid rows, and track which issues you own."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Read settings from this file instead of the default locations
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Issues
    // ─────────────────────────────────────────────────────────────────────────
    /// List the issues a range description expands to
    #[command(after_help = colors::examples("\
Examples:
  longbox parse 12                 Issues 1 through 12
  longbox parse \"1-20, 22+\"        Ranges, ongoing series
  longbox parse \"-1, 1a, 3-5\"      Special issues mixed in
  longbox parse 1-5 -o json        Machine-readable output"))]
    Parse {
        #[command(flatten)]
        range: RangeArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show issues packed into grid rows
    #[command(after_help = colors::examples("\
Examples:
  longbox grid 50                  Five full rows
  longbox grid \"1-3, 20-21\"        Gaps keep issues in their column
  longbox grid 30+ --owned 1-12    Highlight owned issues
  longbox grid 24 -w 6             Six issues per row"))]
    Grid {
        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        owned: OwnedArgs,

        /// Issues per row (default from config, 10 if unset)
        #[arg(long, short = 'w', value_parser = row_width, value_name = "N")]
        width: Option<usize>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show how much of a title is owned
    #[command(after_help = colors::examples("\
Examples:
  longbox progress 20 --owned 1-3     3/20 (15.0%)
  longbox progress 20+ --owned 1-3    3/20+ (~15.0%)"))]
    Progress {
        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        owned: OwnedArgs,
    },

    /// Convert copy/variant labels and storage keys
    #[command(subcommand)]
    Key(KeyCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup & Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the effective configuration and where it came from
    Config,

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  longbox completion bash > ~/.local/share/bash-completion/completions/longbox
  longbox completion zsh > ~/.zfunc/_longbox
  longbox completion fish > ~/.config/fish/completions/longbox.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for commands with JSON output
    ///
    /// Use these schemas to validate JSON output or generate type definitions.
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  longbox schema parse    Output schema for 'longbox parse -o json'
  longbox schema grid     Output schema for 'longbox grid -o json'

Available schemas: parse, grid")
    )]
    Schema(SchemaCommand),
}

/// Copy/variant key commands.
#[derive(Subcommand)]
pub enum KeyCommand {
    /// Turn a label like "2nd Copy" into its storage key
    #[command(after_help = colors::examples("\
Examples:
  longbox key encode Copy            copy01
  longbox key encode \"3rd Variant\"   variant03"))]
    Encode {
        /// Display label
        label: String,
    },

    /// Turn a storage key like "copy02" back into its label
    #[command(after_help = colors::examples("\
Examples:
  longbox key decode copy02       2nd Copy
  longbox key decode variant01    Variant"))]
    Decode {
        /// Storage key
        key: String,
    },
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'longbox parse' JSON output
    Parse,
    /// Output JSON Schema for 'longbox grid' JSON output
    Grid,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
