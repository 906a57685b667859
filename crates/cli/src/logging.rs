// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Filtered by `LONGBOX_LOG` using `tracing-subscriber` directives
//! (`debug`, `lbrs=trace`, ...). Defaults to `warn`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let filter = build_filter(&crate::env::log_filter());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

/// Parse a filter directive, falling back to the default on a bad one.
pub(crate) fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive)
        .unwrap_or_else(|_| EnvFilter::new(crate::env::DEFAULT_LOG_FILTER))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
