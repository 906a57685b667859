// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lb-core operations.

use thiserror::Error;

/// All possible errors that can occur in lb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue number: '{0}'\n  hint: use forms like 12, -1, -1.5, 1a or 1_variant")]
    InvalidIssueId(String),

    #[error("invalid row width: {0}\n  hint: row width must be at least 1")]
    InvalidRowWidth(usize),

    #[error("invalid extra key: '{0}'\n  hint: keys look like copy02 or variant01")]
    InvalidExtraKey(String),

    #[error("invalid extra label: '{0}'\n  hint: labels look like Copy, 2nd Copy, Variant, 3rd Variant")]
    InvalidExtraLabel(String),

    #[error("invalid value for '{key}': '{value}'")]
    InvalidFlatValue { key: String, value: String },

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("'{input}' couldn't be parsed\n  hint: try a count like 12, a range like 1-20, or a list like 1-3, 5, -1")]
    NothingParsed { input: String },

    #[error("the following range(s) caused problems: {}", .0.join(", "))]
    UnparseableTokens(Vec<String>),

    #[error("'{0}' is not a valid selection\n  hint: use ranges like 1-15 or numbers separated by commas")]
    InvalidSelection(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
