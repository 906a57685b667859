// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row packing: laying issue identifiers out in a fixed-width grid.
//!
//! Standard issues keep their column: issue `v` always lands in column
//! `(v - 1) % width`, so with the default width of 10 every row starts at an
//! issue ending in 1. Blank slots fill the holes, and a gap of a full row or
//! more shrinks to one row of blanks plus the alignment blanks. Special
//! issues (zero, negative, fractional, suffixed) come first as a block that
//! is right-aligned to end on a row boundary.
//!
//! ```text
//! pack([-1, 1, 2, 3, 5, 20, 21, 45])
//!
//!  .  .  .  .  .  .  .  .  . -1
//!  1  2  3  .  5  .  .  .  .  .
//!  .  .  .  .  .  .  .  .  . 20
//! 21  .  .  .  .  .  .  .  .  .
//!  .  .  .  . 45  .  .  .  .  .
//! ```

use std::num::NonZeroUsize;

use crate::error::{Error, Result};
use crate::issue_id::IssueId;

/// Number of slots per grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowWidth(NonZeroUsize);

impl RowWidth {
    /// Width used by the collection screens.
    pub const DEFAULT: usize = 10;

    pub fn new(width: usize) -> Result<Self> {
        NonZeroUsize::new(width)
            .map(RowWidth)
            .ok_or(Error::InvalidRowWidth(width))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for RowWidth {
    fn default() -> Self {
        match NonZeroUsize::new(Self::DEFAULT) {
            Some(width) => RowWidth(width),
            None => unreachable!("default row width is non-zero"),
        }
    }
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Issue(IssueId),
    Blank,
}

impl Slot {
    pub fn is_blank(&self) -> bool {
        matches!(self, Slot::Blank)
    }

    pub fn issue(&self) -> Option<&IssueId> {
        match self {
            Slot::Issue(id) => Some(id),
            Slot::Blank => None,
        }
    }
}

/// Pack sorted identifiers into a row-major slot sequence.
///
/// `sorted_ids` must be strictly increasing, as produced by an
/// [`IssueSet`](crate::IssueSet). The result length is always a multiple of
/// the row width; empty input gives an empty sequence.
pub fn pack(sorted_ids: &[IssueId], width: RowWidth) -> Vec<Slot> {
    let width = width.get();
    let (special, standard): (Vec<&IssueId>, Vec<&IssueId>) =
        sorted_ids.iter().partition(|id| !id.is_standard());
    let numbers: Vec<i64> = standard.iter().filter_map(|id| id.as_standard()).collect();

    let mut slots = Vec::with_capacity(sorted_ids.len() + 2 * width);
    pack_special(&special, width, &mut slots);
    pack_standard(&numbers, width, &mut slots);
    slots
}

fn pack_special(ids: &[&IssueId], width: usize, out: &mut Vec<Slot>) {
    if ids.is_empty() {
        return;
    }
    push_blanks(out, (width - ids.len() % width) % width);
    out.extend(ids.iter().map(|&id| Slot::Issue(id.clone())));
}

fn pack_standard(numbers: &[i64], width: usize, out: &mut Vec<Slot>) {
    let (Some(&first), Some(&last)) = (numbers.first(), numbers.last()) else {
        return;
    };

    // Already 1..=N: nothing to align
    if last == numbers.len() as i64 {
        out.extend(numbers.iter().map(|&n| Slot::Issue(IssueId::Integer(n))));
        push_blanks(out, trailing_blanks(last, width));
        return;
    }

    push_blanks(out, column(first, width));
    let mut prev_last: Option<i64> = None;
    for run in numbers.chunk_by(|a, b| b - a == 1) {
        if let (Some(prev), Some(&start)) = (prev_last, run.first()) {
            let diff = start - prev;
            if diff >= width as i64 {
                push_blanks(out, width);
            }
            push_blanks(out, (diff - 1).rem_euclid(width as i64) as usize);
        }
        out.extend(run.iter().map(|&n| Slot::Issue(IssueId::Integer(n))));
        prev_last = run.last().copied();
    }
    push_blanks(out, trailing_blanks(last, width));
}

/// Zero-based column of a standard issue.
fn column(value: i64, width: usize) -> usize {
    (value - 1).rem_euclid(width as i64) as usize
}

fn trailing_blanks(last: i64, width: usize) -> usize {
    width - 1 - column(last, width)
}

fn push_blanks(out: &mut Vec<Slot>, count: usize) {
    out.extend(std::iter::repeat_n(Slot::Blank, count));
}

/// A packed grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: RowWidth,
    slots: Vec<Slot>,
}

impl Layout {
    pub fn new(sorted_ids: &[IssueId], width: RowWidth) -> Self {
        Layout {
            width,
            slots: pack(sorted_ids, width),
        }
    }

    pub fn width(&self) -> RowWidth {
        self.width
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Rows of exactly [`width`](Self::width) slots.
    pub fn rows(&self) -> impl Iterator<Item = &[Slot]> {
        self.slots.chunks(self.width.get())
    }

    pub fn row_count(&self) -> usize {
        self.slots.len() / self.width.get()
    }

    pub fn issue_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_blank()).count()
    }

    pub fn blank_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_blank()).count()
    }

    /// Row and column of an issue, if it is in the grid.
    pub fn position_of(&self, id: &IssueId) -> Option<(usize, usize)> {
        let index = self.slots.iter().position(|s| s.issue() == Some(id))?;
        let width = self.width.get();
        Some((index / width, index % width))
    }
}

#[cfg(test)]
#[path = "pack_tests.rs"]
mod tests;
