// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The issues of one title and what the collector owns of them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::issue_id::IssueId;
use crate::pack::{Layout, RowWidth};
use crate::record::IssueRecord;

/// Ordered mapping of issue identifiers to records, plus the ongoing flag.
///
/// Built by [`range::parse`](crate::range::parse). A new parse produces a new
/// set; sets are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSet {
    issues: BTreeMap<IssueId, IssueRecord>,
    /// True when the series has no known final issue yet.
    #[serde(default)]
    pub ongoing: bool,
}

impl IssueSet {
    /// Create an empty set.
    pub fn new(ongoing: bool) -> Self {
        IssueSet {
            issues: BTreeMap::new(),
            ongoing,
        }
    }

    /// Add an issue with an empty record. Returns false if already present.
    pub fn insert(&mut self, id: IssueId) -> bool {
        if self.issues.contains_key(&id) {
            return false;
        }
        self.issues.insert(id, IssueRecord::default());
        true
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn contains(&self, id: &IssueId) -> bool {
        self.issues.contains_key(id)
    }

    pub fn get(&self, id: &IssueId) -> Option<&IssueRecord> {
        self.issues.get(id)
    }

    pub fn get_mut(&mut self, id: &IssueId) -> Option<&mut IssueRecord> {
        self.issues.get_mut(id)
    }

    /// All identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &IssueId> {
        self.issues.keys()
    }

    /// All records in identifier order.
    pub fn records(&self) -> impl Iterator<Item = &IssueRecord> {
        self.issues.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IssueId, &IssueRecord)> {
        self.issues.iter()
    }

    /// Positive integer issues, in order.
    pub fn standard_ids(&self) -> impl Iterator<Item = &IssueId> {
        self.ids().filter(|id| id.is_standard())
    }

    /// Zero, negative, fractional and suffixed issues, in order.
    pub fn special_ids(&self) -> impl Iterator<Item = &IssueId> {
        self.ids().filter(|id| !id.is_standard())
    }

    /// Mark one issue owned or not owned.
    pub fn set_owned(&mut self, id: &IssueId, owned: bool) -> Result<()> {
        let record = self
            .issues
            .get_mut(id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        record.owned = owned;
        Ok(())
    }

    /// Flip ownership of one issue. Returns the new state.
    pub fn toggle(&mut self, id: &IssueId) -> Result<bool> {
        let record = self
            .issues
            .get_mut(id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        record.owned = !record.owned;
        Ok(record.owned)
    }

    /// Set ownership for every listed issue that exists.
    ///
    /// Returns the identifiers that are not part of this set, in input order.
    pub fn select(&mut self, ids: &[IssueId], owned: bool) -> Vec<IssueId> {
        let mut missing = Vec::new();
        for id in ids {
            match self.issues.get_mut(id) {
                Some(record) => record.owned = owned,
                None => missing.push(id.clone()),
            }
        }
        missing
    }

    pub fn select_all(&mut self) {
        self.issues.values_mut().for_each(|r| r.owned = true);
    }

    pub fn deselect_all(&mut self) {
        self.issues.values_mut().for_each(|r| r.owned = false);
    }

    pub fn owned_count(&self) -> usize {
        self.records().filter(|r| r.owned).count()
    }

    pub fn owned_ids(&self) -> impl Iterator<Item = &IssueId> {
        self.iter().filter(|(_, r)| r.owned).map(|(id, _)| id)
    }

    /// Collection progress for this title.
    pub fn progress(&self) -> Progress {
        Progress {
            owned: self.owned_count(),
            total: self.len(),
            ongoing: self.ongoing,
        }
    }

    /// Pack all identifiers into grid rows.
    pub fn layout(&self, width: RowWidth) -> Layout {
        let ids: Vec<IssueId> = self.ids().cloned().collect();
        Layout::new(&ids, width)
    }
}

/// Owned versus known issues of a title.
///
/// Displays as `3/20 (15.0%)`, or `3/20+ (~15.0%)` while the series is
/// ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub owned: usize,
    pub total: usize,
    pub ongoing: bool,
}

impl Progress {
    /// Owned share in percent, or `None` for an empty title.
    pub fn percent(&self) -> Option<f64> {
        (self.total > 0).then(|| self.owned as f64 * 100.0 / self.total as f64)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.owned == self.total && !self.ongoing
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (plus, approx) = if self.ongoing { ("+", "~") } else { ("", "") };
        write!(f, "{}/{}{}", self.owned, self.total, plus)?;
        match self.percent() {
            Some(percent) => write!(f, " ({}{:.1}%)", approx, percent),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "issue_set_tests.rs"]
mod tests;
