// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lbrs - the library behind the `longbox` CLI.
//!
//! Wraps [`lb_core`] with configuration, terminal rendering and JSON output.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap definitions for every subcommand
//! - [`Config`] - settings from `longbox.toml`
//! - [`Error`] - Error types for all operations
//!
//! Commands can be run without spawning a process:
//!
//! ```rust,ignore
//! use clap::Parser;
//! use lbrs::Cli;
//!
//! let cli = Cli::parse_from(["longbox", "progress", "20+", "--owned", "1-3"]);
//! lbrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod logging;
mod schema;
pub mod timings;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, KeyCommand, OutputFormat, OwnedArgs, RangeArgs, SchemaCommand};
pub use config::{Config, ConfigSource};
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
///
/// Configuration is only loaded by commands that use it.
pub fn run(cli: Cli) -> Result<()> {
    let load_config = || Config::load(cli.config.as_deref());

    match cli.command {
        Command::Parse { range, output } => {
            let (config, _) = load_config()?;
            commands::parse::run(range, output, &config)
        }
        Command::Grid {
            range,
            owned,
            width,
            output,
        } => {
            let (config, _) = load_config()?;
            commands::grid::run(range, owned, width, output, &config)
        }
        Command::Progress { range, owned } => {
            let (config, _) = load_config()?;
            commands::progress::run(range, owned, &config)
        }
        Command::Config => {
            let (config, source) = load_config()?;
            commands::config::run(&config, &source)
        }
        Command::Key(cmd) => commands::key::run(cmd),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => commands::completion::run(shell),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
