// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn ints(values: &[i64]) -> Vec<IssueId> {
    values.iter().copied().map(IssueId::Integer).collect()
}

fn width(n: usize) -> RowWidth {
    RowWidth::new(n).unwrap()
}

/// Render slots as strings, blanks as `.`.
fn render(slots: &[Slot]) -> Vec<String> {
    slots
        .iter()
        .map(|s| match s {
            Slot::Issue(id) => id.to_string(),
            Slot::Blank => ".".to_string(),
        })
        .collect()
}

fn row(cells: &str) -> Vec<String> {
    cells.split_whitespace().map(String::from).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// RowWidth
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn default_width_is_ten() {
    assert_eq!(RowWidth::default().get(), 10);
}

#[test]
fn zero_width_is_rejected() {
    let err = RowWidth::new(0).unwrap_err();
    assert!(matches!(err, Error::InvalidRowWidth(0)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard issues
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_gives_no_slots() {
    assert!(pack(&[], RowWidth::default()).is_empty());
}

#[test]
fn contiguous_from_one_fills_trailing_blanks() {
    let slots = pack(&ints(&[1, 2, 3]), RowWidth::default());
    assert_eq!(render(&slots), row("1 2 3 . . . . . . ."));
}

#[test]
fn exact_row_needs_no_trailing_blanks() {
    let ids: Vec<i64> = (1..=10).collect();
    let slots = pack(&ints(&ids), RowWidth::default());
    assert_eq!(slots.len(), 10);
    assert!(slots.iter().all(|s| !s.is_blank()));
}

#[test]
fn first_issue_is_pushed_to_its_column() {
    let slots = pack(&ints(&[11, 12]), RowWidth::default());
    assert_eq!(render(&slots), row("11 12 . . . . . . . ."));

    let slots = pack(&ints(&[4]), RowWidth::default());
    assert_eq!(render(&slots), row(". . . 4 . . . . . ."));
}

#[test]
fn long_gap_shrinks_to_one_blank_row_plus_alignment() {
    let slots = pack(&ints(&[1, 2, 3, 20, 21]), RowWidth::default());
    let mut expected = row("1 2 3 . . . . . . .");
    expected.extend(row(". . . . . . . . . 20"));
    expected.extend(row("21 . . . . . . . . ."));
    assert_eq!(render(&slots), expected);

    let longest_blank_run = slots
        .chunk_by(|a, b| a.is_blank() == b.is_blank())
        .filter(|run| run[0].is_blank())
        .map(<[Slot]>::len)
        .max()
        .unwrap();
    assert_eq!(longest_blank_run, 16);
}

#[test]
fn gap_of_exactly_one_row_keeps_a_blank_row() {
    let slots = pack(&ints(&[10, 20]), RowWidth::default());
    let mut expected = row(". . . . . . . . . 10");
    expected.extend(row(". . . . . . . . . ."));
    expected.extend(row(". . . . . . . . . 20"));
    assert_eq!(render(&slots), expected);
}

#[test]
fn short_gap_is_filled_in_place() {
    let slots = pack(&ints(&[1, 2, 3, 5]), RowWidth::default());
    assert_eq!(render(&slots), row("1 2 3 . 5 . . . . ."));
}

#[parameterized(
    dense = { &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12] },
    sparse = { &[3, 7, 19, 20, 33, 58, 59, 60, 101] },
    single = { &[42] },
    leading_gap = { &[15, 16, 17, 40] },
    exact_rows = { &[1, 11, 21, 31] },
)]
fn standard_issues_keep_their_column(values: &[i64]) {
    for w in [1, 3, 7, 10] {
        let slots = pack(&ints(values), width(w));
        assert_eq!(slots.len() % w, 0, "width {w}");
        for (index, slot) in slots.iter().enumerate() {
            if let Some(IssueId::Integer(n)) = slot.issue() {
                assert_eq!(index % w, column(*n, w), "issue {n} at width {w}");
            }
        }
    }
}

#[test]
fn contiguous_run_pads_its_last_row() {
    let ids: Vec<i64> = (1..=13).collect();
    let fast = pack(&ints(&ids), RowWidth::default());
    assert_eq!(fast.len(), 20);
    assert_eq!(render(&fast[10..13]), row("11 12 13"));
    assert!(fast[13..].iter().all(Slot::is_blank));
}

// ─────────────────────────────────────────────────────────────────────────────
// Special issues
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn specials_are_right_aligned_before_standard_issues() {
    let mut ids = vec![IssueId::Fractional(-1.5), IssueId::Integer(0)];
    ids.extend(ints(&[1, 2]));
    let slots = pack(&ids, width(4));
    assert_eq!(render(&slots), row(". . -1.5 0 1 2 . ."));
}

#[test]
fn full_row_of_specials_gets_no_padding() {
    let ids = ints(&[-3, -2, -1, 0]);
    let slots = pack(&ids, width(4));
    assert_eq!(render(&slots), row("-3 -2 -1 0"));
}

#[test]
fn composite_issues_are_special() {
    let ids = vec![
        IssueId::Integer(1),
        IssueId::Composite {
            base: 1,
            suffix: "a".to_string(),
        },
    ];
    let slots = pack(&ids, width(3));
    assert_eq!(render(&slots), row(". . 1a 1 . ."));
}

#[test]
fn module_example_layout() {
    let mut ids = vec![IssueId::Integer(-1)];
    ids.extend(ints(&[1, 2, 3, 5, 20, 21, 45]));
    let layout = Layout::new(&ids, RowWidth::default());
    let rows: Vec<Vec<String>> = layout.rows().map(render).collect();
    assert_eq!(
        rows,
        vec![
            row(". . . . . . . . . -1"),
            row("1 2 3 . 5 . . . . ."),
            row(". . . . . . . . . 20"),
            row("21 . . . . . . . . ."),
            row(". . . . 45 . . . . ."),
        ]
    );
}

#[test]
fn packing_is_deterministic() {
    let ids = ints(&[-2, 4, 5, 17, 90]);
    assert_eq!(
        pack(&ids, RowWidth::default()),
        pack(&ids, RowWidth::default())
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn layout_counts_and_positions() {
    let layout = Layout::new(&ints(&[1, 2, 3, 20, 21]), RowWidth::default());
    assert_eq!(layout.width().get(), 10);
    assert_eq!(layout.row_count(), 3);
    assert_eq!(layout.issue_count(), 5);
    assert_eq!(layout.blank_count(), 25);
    assert_eq!(layout.position_of(&IssueId::Integer(20)), Some((1, 9)));
    assert_eq!(layout.position_of(&IssueId::Integer(21)), Some((2, 0)));
    assert_eq!(layout.position_of(&IssueId::Integer(4)), None);
}

#[test]
fn empty_layout_has_no_rows() {
    let layout = Layout::new(&[], RowWidth::default());
    assert_eq!(layout.row_count(), 0);
    assert_eq!(layout.rows().count(), 0);
    assert!(layout.slots().is_empty());
}
