// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `longbox parse` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use lb_core::{ParseOutcome, TokenError};

use super::{IssueKind, TokenErrorKindJson};

/// JSON output structure for the parse command.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct ParseOutputJson {
    /// The trimmed range description.
    pub input: String,
    /// Issues in order.
    pub issues: Vec<IssueJson>,
    /// True when the description marked the series as ongoing.
    pub ongoing: bool,
    /// Tokens that could not be parsed, in input order.
    pub errors: Vec<TokenErrorJson>,
}

/// One parsed issue.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct IssueJson {
    /// Issue number as written, e.g. "12", "-1.5" or "1a".
    pub id: String,
    /// Standard or special.
    pub kind: IssueKind,
}

/// A rejected token.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct TokenErrorJson {
    /// The token text.
    pub token: String,
    /// Why it was rejected.
    pub kind: TokenErrorKindJson,
}

impl From<&TokenError> for TokenErrorJson {
    fn from(error: &TokenError) -> Self {
        TokenErrorJson {
            token: error.token.clone(),
            kind: error.kind.into(),
        }
    }
}

impl From<&ParseOutcome> for ParseOutputJson {
    fn from(outcome: &ParseOutcome) -> Self {
        ParseOutputJson {
            input: outcome.input.clone(),
            issues: outcome
                .issues
                .ids()
                .map(|id| IssueJson {
                    id: id.to_string(),
                    kind: id.into(),
                })
                .collect(),
            ongoing: outcome.issues.ongoing,
            errors: outcome.errors.iter().map(TokenErrorJson::from).collect(),
        }
    }
}
