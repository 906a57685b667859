// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection ranges: which issues to mark as owned.

use crate::error::{Error, Result};
use crate::issue_id::IssueId;

use super::token::{classify, Token};

/// Parse a selection like `1-3, 5, -1` into identifiers, in input order.
///
/// Unlike [`parse`](super::parse), the first bad token aborts the whole
/// selection.
pub fn parse_selection(input: &str) -> Result<Vec<IssueId>> {
    let mut selection = Vec::new();

    for raw in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match classify(raw) {
            Ok(Token::Range {
                start,
                end,
                ongoing: false,
            }) => selection.extend((start..=end).map(IssueId::Integer)),
            Ok(Token::Single { id, ongoing: false }) => selection.push(id),
            _ => return Err(Error::InvalidSelection(raw.to_string())),
        }
    }

    if selection.is_empty() {
        return Err(Error::InvalidSelection(input.trim().to_string()));
    }
    Ok(selection)
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
