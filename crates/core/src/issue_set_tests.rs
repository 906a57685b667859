// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn set_of(values: &[i64], ongoing: bool) -> IssueSet {
    let mut set = IssueSet::new(ongoing);
    for &n in values {
        set.insert(IssueId::Integer(n));
    }
    set
}

#[test]
fn insert_keeps_order_and_rejects_duplicates() {
    let mut set = IssueSet::default();
    assert!(set.insert(IssueId::Integer(3)));
    assert!(set.insert(IssueId::Integer(-1)));
    assert!(set.insert(IssueId::Integer(1)));
    assert!(!set.insert(IssueId::Integer(3)));

    let ids: Vec<String> = set.ids().map(ToString::to_string).collect();
    assert_eq!(ids, vec!["-1", "1", "3"]);
    assert_eq!(set.len(), 3);
}

#[test]
fn standard_and_special_partition_the_set() {
    let mut set = set_of(&[0, 1, 2], false);
    set.insert(IssueId::Fractional(-0.5));
    set.insert("2a".parse().unwrap());

    let standard: Vec<String> = set.standard_ids().map(ToString::to_string).collect();
    let special: Vec<String> = set.special_ids().map(ToString::to_string).collect();
    assert_eq!(standard, vec!["1", "2"]);
    assert_eq!(special, vec!["-0.5", "0", "2a"]);
}

#[test]
fn toggle_flips_ownership() {
    let mut set = set_of(&[1, 2], false);
    let id = IssueId::Integer(2);
    assert!(set.toggle(&id).unwrap());
    assert!(set.get(&id).unwrap().owned);
    assert!(!set.toggle(&id).unwrap());
    assert_eq!(set.owned_count(), 0);
}

#[test]
fn missing_issue_is_reported() {
    let mut set = set_of(&[1], false);
    let err = set.set_owned(&IssueId::Integer(9), true).unwrap_err();
    assert!(matches!(err, Error::IssueNotFound(ref id) if id == "9"));
    assert!(set.toggle(&IssueId::Integer(9)).is_err());
}

#[test]
fn select_marks_known_issues_and_returns_the_rest() {
    let mut set = set_of(&[1, 2, 3, 4], false);
    let missing = set.select(&[IssueId::Integer(7), IssueId::Integer(2), IssueId::Integer(3)], true);
    assert_eq!(missing, vec![IssueId::Integer(7)]);

    let owned: Vec<String> = set.owned_ids().map(ToString::to_string).collect();
    assert_eq!(owned, vec!["2", "3"]);

    set.select(&[IssueId::Integer(2)], false);
    assert_eq!(set.owned_count(), 1);
}

#[test]
fn select_all_and_deselect_all() {
    let mut set = set_of(&[1, 2, 3], false);
    set.select_all();
    assert_eq!(set.owned_count(), 3);
    set.deselect_all();
    assert_eq!(set.owned_count(), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Progress
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    none_owned = { 0, 20, false, "0/20 (0.0%)" },
    some_owned = { 3, 20, false, "3/20 (15.0%)" },
    ongoing = { 3, 20, true, "3/20+ (~15.0%)" },
    complete = { 4, 4, false, "4/4 (100.0%)" },
    thirds = { 1, 3, false, "1/3 (33.3%)" },
    empty = { 0, 0, false, "0/0" },
)]
fn progress_display(owned: usize, total: usize, ongoing: bool, expected: &str) {
    let progress = Progress {
        owned,
        total,
        ongoing,
    };
    assert_eq!(progress.to_string(), expected);
}

#[test]
fn progress_tracks_owned_issues() {
    let mut set = set_of(&[1, 2, 3, 4], true);
    set.select(&[IssueId::Integer(1)], true);
    let progress = set.progress();
    assert_eq!(progress.owned, 1);
    assert_eq!(progress.total, 4);
    assert!(progress.ongoing);
    assert_eq!(progress.percent(), Some(25.0));
}

#[test]
fn complete_requires_every_issue_and_a_finished_series() {
    let mut set = set_of(&[1, 2], false);
    assert!(!set.progress().is_complete());
    set.select_all();
    assert!(set.progress().is_complete());

    set.ongoing = true;
    assert!(!set.progress().is_complete());

    assert!(!IssueSet::default().progress().is_complete());
    assert_eq!(IssueSet::default().progress().percent(), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Serialization and layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn json_is_keyed_by_issue_number() {
    let mut set = set_of(&[1, 2], true);
    set.set_owned(&IssueId::Integer(2), true).unwrap();

    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "issues": {
                "1": { "owned": false },
                "2": { "owned": true },
            },
            "ongoing": true,
        })
    );
}

#[test]
fn json_round_trip_keeps_special_issues() {
    let mut set = set_of(&[1], false);
    set.insert(IssueId::Fractional(-1.0));
    set.insert("1_variant".parse().unwrap());
    set.get_mut(&IssueId::Integer(1)).unwrap().notes = Some("first print".into());

    let json = serde_json::to_string(&set).unwrap();
    let back: IssueSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn json_round_trip_keeps_inserted_long_numbers() {
    let set = set_of(&[12345, -12345], false);
    let json = serde_json::to_string(&set).unwrap();
    let back: IssueSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn missing_ongoing_defaults_to_false() {
    let set: IssueSet = serde_json::from_str(r#"{"issues": {"5": {"owned": true}}}"#).unwrap();
    assert!(!set.ongoing);
    assert!(set.get(&IssueId::Integer(5)).unwrap().owned);
}

#[test]
fn layout_uses_every_issue() {
    let mut set = set_of(&[1, 2, 3, 20, 21], false);
    set.insert(IssueId::Integer(-1));
    let layout = set.layout(RowWidth::default());
    assert_eq!(layout.issue_count(), 6);
    assert_eq!(layout.row_count(), 4);
    assert_eq!(layout.position_of(&IssueId::Integer(-1)), Some((0, 9)));
}
