// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Codec between copy/variant display labels and storage keys.
//!
//! | Label          | Key         |
//! |----------------|-------------|
//! | `Copy`         | `copy01`    |
//! | `2nd Copy`     | `copy02`    |
//! | `3rd Variant`  | `variant03` |
//! | `12th Variant` | `variant12` |
//!
//! Counts above three always take `th`, so `21th Copy` is the label for
//! `copy21`. Both directions are lossless over `{copy, variant} x 1..=99`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest count that fits the two-digit key suffix.
pub const MAX_COUNT: u8 = 99;

/// Kind of extra physical instance tracked for an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    /// Another copy of the same printing.
    Copy,
    /// An alternate cover or printing.
    Variant,
}

impl ExtraKind {
    /// Returns the lowercase form used in storage keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraKind::Copy => "copy",
            ExtraKind::Variant => "variant",
        }
    }

    /// Returns the capitalized form used in labels.
    pub fn title(&self) -> &'static str {
        match self {
            ExtraKind::Copy => "Copy",
            ExtraKind::Variant => "Variant",
        }
    }
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExtraKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "copy" => Ok(ExtraKind::Copy),
            "variant" => Ok(ExtraKind::Variant),
            _ => Err(Error::InvalidExtraLabel(s.to_string())),
        }
    }
}

/// Build the storage key for a kind and count, e.g. `copy02`.
pub fn key_for(kind: ExtraKind, count: u8) -> Result<String> {
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(Error::InvalidExtraKey(format!("{}{:02}", kind, count)));
    }
    Ok(format!("{}{:02}", kind.as_str(), count))
}

/// Build the display label for a kind and count, e.g. `2nd Copy`.
pub fn label_for(kind: ExtraKind, count: u8) -> Result<String> {
    match count {
        1 => Ok(kind.title().to_string()),
        2..=MAX_COUNT => Ok(format!("{}{} {}", count, ordinal_suffix(count), kind.title())),
        _ => Err(Error::InvalidExtraLabel(format!("{} {}", count, kind.title()))),
    }
}

/// Split a storage key into kind and count.
///
/// The category is everything but the last two characters, the count is the
/// last two characters.
pub fn parse_key(key: &str) -> Result<(ExtraKind, u8)> {
    let invalid = || Error::InvalidExtraKey(key.to_string());

    if !key.is_ascii() || key.len() <= 2 {
        return Err(invalid());
    }
    let (category, digits) = key.split_at(key.len() - 2);
    let kind = match category {
        "copy" => ExtraKind::Copy,
        "variant" => ExtraKind::Variant,
        _ => return Err(invalid()),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let count: u8 = digits.parse().map_err(|_| invalid())?;
    if count == 0 {
        return Err(invalid());
    }
    Ok((kind, count))
}

/// Split a display label into kind and count.
///
/// A bare category (`Copy`) is count 1; otherwise a leading ordinal
/// (`2nd`, `3rd`, `4th`, ...) gives the count.
pub fn parse_label(label: &str) -> Result<(ExtraKind, u8)> {
    let invalid = || Error::InvalidExtraLabel(label.to_string());

    let words: Vec<&str> = label.split_whitespace().collect();
    match words.as_slice() {
        [category] => Ok((category.parse().map_err(|_| invalid())?, 1)),
        [ordinal, category] => {
            let kind: ExtraKind = category.parse().map_err(|_| invalid())?;
            let count = parse_ordinal(ordinal).ok_or_else(invalid)?;
            Ok((kind, count))
        }
        _ => Err(invalid()),
    }
}

/// Convert a label to its storage key: `2nd Copy` -> `copy02`.
pub fn encode(label: &str) -> Result<String> {
    let (kind, count) = parse_label(label)?;
    key_for(kind, count)
}

/// Convert a storage key to its label: `copy02` -> `2nd Copy`.
pub fn decode(key: &str) -> Result<String> {
    let (kind, count) = parse_key(key)?;
    label_for(kind, count)
}

fn ordinal_suffix(count: u8) -> &'static str {
    match count {
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn parse_ordinal(word: &str) -> Option<u8> {
    let split = word.find(|c: char| !c.is_ascii_digit())?;
    let (digits, suffix) = word.split_at(split);
    let count: u8 = digits.parse().ok()?;
    if !(2..=MAX_COUNT).contains(&count) || digits.starts_with('0') {
        return None;
    }
    (suffix == ordinal_suffix(count)).then_some(count)
}

#[cfg(test)]
#[path = "extra_key_tests.rs"]
mod tests;
