// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-issue records.
//!
//! A record starts empty when the issue set is parsed and is filled in as the
//! user marks issues owned, writes notes, or tracks extra copies and variants.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::extra_key::{self, ExtraKind, MAX_COUNT};

/// Flat-map key holding the ownership flag.
pub const OWNED_KEY: &str = "owned";
/// Flat-map key holding free-text notes.
pub const NOTES_KEY: &str = "notes";

/// One extra physical instance of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub kind: ExtraKind,
    /// Position among extras of the same kind, starting at 1.
    pub ordinal: u8,
    pub note: String,
}

impl Extra {
    /// Storage key, e.g. `copy02`.
    pub fn key(&self) -> Result<String> {
        extra_key::key_for(self.kind, self.ordinal)
    }

    /// Display label, e.g. `2nd Copy`.
    pub fn label(&self) -> Result<String> {
        extra_key::label_for(self.kind, self.ordinal)
    }
}

/// What the collector knows about one issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub owned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<Extra>,
}

impl IssueRecord {
    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        !self.owned && self.notes.is_none() && self.extras.is_empty()
    }

    /// Returns true if the record carries any text worth flagging in a grid.
    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
            || self.extras.iter().any(|e| !e.note.trim().is_empty())
    }

    /// Extras of one kind, in ordinal order.
    pub fn extras_of(&self, kind: ExtraKind) -> impl Iterator<Item = &Extra> {
        self.extras.iter().filter(move |e| e.kind == kind)
    }

    /// Ordinal the next extra of `kind` would get.
    ///
    /// An owned issue is itself the first copy, so extra copies of an owned
    /// issue start at 2. Ordinals already handed out never shift when
    /// ownership changes later.
    pub fn next_ordinal(&self, kind: ExtraKind) -> u8 {
        let highest = self.extras_of(kind).map(|e| e.ordinal).max().unwrap_or(0);
        highest.max(self.first_ordinal(kind) - 1).saturating_add(1)
    }

    /// Track another copy or variant. Returns the ordinal assigned.
    pub fn add_extra(&mut self, kind: ExtraKind, note: impl Into<String>) -> Result<u8> {
        let ordinal = self.next_ordinal(kind);
        if ordinal > MAX_COUNT {
            return Err(Error::InvalidExtraKey(format!("{}{}", kind, ordinal)));
        }
        self.extras.push(Extra {
            kind,
            ordinal,
            note: note.into(),
        });
        Ok(ordinal)
    }

    /// Remove one extra and close the gap it leaves: extras of the same kind
    /// above it move down by one, those below keep their ordinals. Returns
    /// false if no such extra exists.
    pub fn remove_extra(&mut self, kind: ExtraKind, ordinal: u8) -> bool {
        let before = self.extras.len();
        self.extras
            .retain(|e| !(e.kind == kind && e.ordinal == ordinal));
        if self.extras.len() == before {
            return false;
        }

        for extra in self
            .extras
            .iter_mut()
            .filter(|e| e.kind == kind && e.ordinal > ordinal)
        {
            extra.ordinal -= 1;
        }
        true
    }

    /// Flatten into the key-value form used by flat storage:
    /// `owned`, `notes`, then one `copyNN` / `variantNN` key per extra.
    pub fn to_flat_map(&self) -> Result<BTreeMap<String, String>> {
        let mut map = BTreeMap::new();
        map.insert(OWNED_KEY.to_string(), self.owned.to_string());
        if let Some(notes) = &self.notes {
            map.insert(NOTES_KEY.to_string(), notes.clone());
        }
        for extra in &self.extras {
            map.insert(extra.key()?, extra.note.clone());
        }
        Ok(map)
    }

    /// Rebuild a record from its flat key-value form.
    ///
    /// Missing `owned` means not owned. Extras come back ordered by kind and
    /// ordinal.
    pub fn from_flat_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut record = IssueRecord::default();
        for (key, value) in map {
            match key.as_str() {
                OWNED_KEY => {
                    record.owned = value.parse().map_err(|_| Error::InvalidFlatValue {
                        key: key.clone(),
                        value: value.clone(),
                    })?;
                }
                NOTES_KEY => record.notes = Some(value.clone()),
                _ => {
                    let (kind, ordinal) = extra_key::parse_key(key)?;
                    record.extras.push(Extra {
                        kind,
                        ordinal,
                        note: value.clone(),
                    });
                }
            }
        }
        record.extras.sort_by_key(|e| (e.kind, e.ordinal));
        Ok(record)
    }

    fn first_ordinal(&self, kind: ExtraKind) -> u8 {
        match kind {
            ExtraKind::Copy if self.owned => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
