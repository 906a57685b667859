// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `longbox grid` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use lb_core::{IssueSet, Layout, Slot};

use super::{IssueKind, ProgressJson};

/// JSON output structure for the grid command.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct GridOutputJson {
    /// Slots per row.
    pub width: usize,
    /// Rows of exactly `width` cells; `null` marks a blank slot.
    pub rows: Vec<Vec<Option<CellJson>>>,
    /// Ownership summary for the whole set.
    pub progress: ProgressJson,
}

/// One occupied grid slot.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct CellJson {
    /// Issue number as written.
    pub id: String,
    /// Standard or special.
    pub kind: IssueKind,
    /// Whether the issue is owned.
    pub owned: bool,
    /// Whether the issue has notes or annotated extras.
    pub notes: bool,
}

impl GridOutputJson {
    /// Build grid output from a packed layout of `set`.
    pub fn new(set: &IssueSet, layout: &Layout) -> Self {
        let rows = layout
            .rows()
            .map(|row| row.iter().map(|slot| cell(set, slot)).collect())
            .collect();
        GridOutputJson {
            width: layout.width().get(),
            rows,
            progress: set.progress().into(),
        }
    }
}

fn cell(set: &IssueSet, slot: &Slot) -> Option<CellJson> {
    let id = slot.issue()?;
    let record = set.get(id);
    Some(CellJson {
        id: id.to_string(),
        kind: id.into(),
        owned: record.is_some_and(|r| r.owned),
        notes: record.is_some_and(|r| r.has_notes()),
    })
}
