// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for issue sets and grids.

use lb_core::{IssueId, IssueSet, Layout, Slot};

use crate::colors::{self, codes};

/// Placeholder shown in blank grid slots.
const BLANK: &str = ".";

/// Marker appended to issues that carry notes.
const NOTE_MARKER: &str = "*";

/// Write a set back as a compact range description.
///
/// Runs of consecutive standard issues collapse to `a-b`, specials are listed
/// one by one, and an ongoing set gets `+` on its last standard entry (or on
/// issue 0 when there is no standard issue). The result parses back to the
/// same set, except that the ongoing flag is lost on a set whose only issues
/// cannot carry `+` (negative, fractional or suffixed).
pub fn format_issue_list(set: &IssueSet) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut last_standard: Option<usize> = None;
    let mut zero: Option<usize> = None;
    let mut run: Option<(i64, i64)> = None;

    let mut flush = |run: &mut Option<(i64, i64)>, parts: &mut Vec<String>| {
        if let Some((start, end)) = run.take() {
            parts.push(if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            });
            last_standard = Some(parts.len() - 1);
        }
    };

    for id in set.ids() {
        match (id.as_standard(), run) {
            (Some(n), Some((start, end))) if n == end + 1 => run = Some((start, n)),
            (Some(n), _) => {
                flush(&mut run, &mut parts);
                run = Some((n, n));
            }
            (None, _) => {
                flush(&mut run, &mut parts);
                if matches!(id, IssueId::Integer(0)) {
                    zero = Some(parts.len());
                }
                parts.push(id.to_string());
            }
        }
    }
    flush(&mut run, &mut parts);

    // A lone number would read back as a count
    if let (1, Some(n)) = (set.len(), set.ids().next().and_then(IssueId::as_standard)) {
        if n != 1 {
            parts = vec![format!("{n}-{n}")];
        }
    }

    if set.ongoing {
        if let Some(part) = last_standard.or(zero).and_then(|i| parts.get_mut(i)) {
            part.push('+');
        }
    }
    parts.join(", ")
}

/// One-line summary: count and ongoing flag.
pub fn format_summary(set: &IssueSet) -> String {
    let noun = if set.len() == 1 { "issue" } else { "issues" };
    if set.ongoing {
        format!("{} {}, ongoing", set.len(), noun)
    } else {
        format!("{} {}", set.len(), noun)
    }
}

/// Render a packed layout, one line per row.
///
/// Without color, owned issues are bracketed (`[12]`); with color they are
/// highlighted and unowned issues dimmed.
pub fn render_grid(set: &IssueSet, layout: &Layout, color: bool) -> String {
    let width = cell_width(set, layout, color);
    let mut out = String::new();
    for row in layout.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| render_cell(set, slot, width, color))
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn cell_width(set: &IssueSet, layout: &Layout, color: bool) -> usize {
    let widest = layout
        .slots()
        .iter()
        .filter_map(Slot::issue)
        .map(|id| cell_text(set, id).chars().count())
        .max()
        .unwrap_or(BLANK.len());
    if color {
        widest
    } else {
        widest + 2
    }
}

fn cell_text(set: &IssueSet, id: &IssueId) -> String {
    let notes = set.get(id).is_some_and(|r| r.has_notes());
    if notes {
        format!("{id}{NOTE_MARKER}")
    } else {
        id.to_string()
    }
}

fn render_cell(set: &IssueSet, slot: &Slot, width: usize, color: bool) -> String {
    let Some(id) = slot.issue() else {
        return format!("{BLANK:>width$}");
    };
    let owned = set.get(id).is_some_and(|r| r.owned);
    let text = cell_text(set, id);

    if !color {
        let text = if owned { format!("[{text}]") } else { text };
        return format!("{text:>width$}");
    }

    let pad = " ".repeat(width.saturating_sub(text.chars().count()));
    let code = if owned { codes::OWNED } else { codes::CONTEXT };
    match text.strip_suffix(NOTE_MARKER) {
        Some(base) => format!(
            "{pad}{}{}",
            colors::paint(code, base),
            colors::paint(codes::NOTE, NOTE_MARKER)
        ),
        None => format!("{pad}{}", colors::paint(code, &text)),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
