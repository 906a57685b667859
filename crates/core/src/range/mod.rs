// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for issue range descriptions.
//!
//! Turns what a user types into the "issues" field into an [`IssueSet`]
//! skeleton: one empty record per issue plus the ongoing-series flag.
//!
//! # Forms
//!
//! ```text
//! 150          # issues 1 through 150
//! 150+         # same, series still ongoing
//! 1-20, 22-24  # ranges and single numbers, comma separated
//! 28-30+       # trailing + on a range marks the series ongoing
//! 20-1         # range ends may come in either order
//! -1, -1.5     # negative specials, optionally with one or two decimals
//! 1a, 1_var    # odd issues: a number with a suffix
//! ```
//!
//! Tokens that match none of these are collected as [`TokenError`]s and
//! parsing carries on with the rest of the input.

mod selection;
pub(crate) mod token;

use std::fmt;

use crate::error::{Error, Result};
use crate::issue_id::IssueId;
use crate::issue_set::IssueSet;

use token::Token;

pub use selection::parse_selection;
pub use token::MAX_DIGITS;

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Matches no recognized form.
    Unparseable,
    /// Has a range separator but a side is not a number.
    MalformedRange,
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenErrorKind::Unparseable => write!(f, "unparseable"),
            TokenErrorKind::MalformedRange => write!(f, "malformed range"),
        }
    }
}

/// A token that could not be parsed, as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError {
    pub token: String,
    pub kind: TokenErrorKind,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.token, self.kind)
    }
}

/// Result of parsing one range description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// The trimmed input.
    pub input: String,
    pub issues: IssueSet,
    /// Rejected tokens, in input order.
    pub errors: Vec<TokenError>,
}

impl ParseOutcome {
    /// Returns true if nothing at all could be parsed.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any token was rejected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The rejected tokens' text, in input order.
    pub fn error_tokens(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.token.clone()).collect()
    }

    /// Check the outcome without consuming it.
    ///
    /// Fails when nothing could be parsed, or in `strict` mode when any token
    /// was rejected.
    pub fn validate(&self, strict: bool) -> Result<()> {
        if strict && self.has_errors() {
            return Err(Error::UnparseableTokens(self.error_tokens()));
        }
        if self.is_empty() {
            return Err(Error::NothingParsed {
                input: self.input.clone(),
            });
        }
        Ok(())
    }

    /// Accept the parsed issues, tolerating rejected tokens.
    ///
    /// Fails only when nothing could be parsed.
    pub fn into_result(self) -> Result<IssueSet> {
        self.validate(false)?;
        Ok(self.issues)
    }

    /// Accept the parsed issues only if every token was valid.
    pub fn into_strict_result(self) -> Result<IssueSet> {
        self.validate(true)?;
        Ok(self.issues)
    }
}

/// Parse a range description into an issue set.
///
/// Never fails: rejected tokens are reported in [`ParseOutcome::errors`] and
/// an unusable input yields an empty set.
pub fn parse(input: &str) -> ParseOutcome {
    let input = input.trim();
    let mut issues = IssueSet::default();
    let mut errors = Vec::new();

    if let Some((count, ongoing)) = token::count_shorthand(input) {
        issues.ongoing = ongoing;
        for n in 1..=count {
            issues.insert(IssueId::Integer(n));
        }
    } else {
        for raw in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token::classify(raw) {
                Ok(Token::Single { id, ongoing }) => {
                    issues.insert(id);
                    issues.ongoing |= ongoing;
                }
                Ok(Token::Range {
                    start,
                    end,
                    ongoing,
                }) => {
                    for n in start..=end {
                        issues.insert(IssueId::Integer(n));
                    }
                    issues.ongoing |= ongoing;
                }
                Err(kind) => errors.push(TokenError {
                    token: raw.to_string(),
                    kind,
                }),
            }
        }
    }

    ParseOutcome {
        input: input.to_string(),
        issues,
        errors,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
