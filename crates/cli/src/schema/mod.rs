// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These are separate from the lb-core types so that schemars stays out of
//! the core crate and so the JSON shape can differ from the in-memory one.
//! Commands build these from core values and serialize them directly.

use schemars::JsonSchema;
use serde::Serialize;

use lb_core::{IssueId, Progress, TokenErrorKind};

pub mod grid;
pub mod parse;

/// Kind of an issue identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Positive whole number; keeps its grid column.
    Standard,
    /// Zero, negative, fractional or suffixed; listed ahead of the grid.
    Special,
}

impl From<&IssueId> for IssueKind {
    fn from(id: &IssueId) -> Self {
        if id.is_standard() {
            IssueKind::Standard
        } else {
            IssueKind::Special
        }
    }
}

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenErrorKindJson {
    /// Matches no recognized form.
    Unparseable,
    /// Has a range separator but a side is not a number.
    MalformedRange,
}

impl From<TokenErrorKind> for TokenErrorKindJson {
    fn from(kind: TokenErrorKind) -> Self {
        match kind {
            TokenErrorKind::Unparseable => TokenErrorKindJson::Unparseable,
            TokenErrorKind::MalformedRange => TokenErrorKindJson::MalformedRange,
        }
    }
}

/// Owned versus known issues.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct ProgressJson {
    /// Issues marked owned.
    pub owned: usize,
    /// Issues in the set.
    pub total: usize,
    /// True when more issues are still to come.
    pub ongoing: bool,
    /// Owned share in percent; absent for an empty set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    /// Display form, e.g. "3/20+ (~15.0%)".
    pub display: String,
}

impl From<Progress> for ProgressJson {
    fn from(progress: Progress) -> Self {
        ProgressJson {
            owned: progress.owned,
            total: progress.total,
            ongoing: progress.ongoing,
            percent: progress.percent(),
            display: progress.to_string(),
        }
    }
}
