// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue identifiers.
//!
//! Most issues carry a plain number. Specials and previews use zero, negative
//! or fractional numbers (`0`, `-1`, `-1.5`), and odd issues carry a suffix
//! on a base number (`1a`, `1_variant`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::range::token::{classify, Token};

/// Identifier of one issue within a title.
///
/// Ordered by numeric value first (a composite uses its base). Identifiers
/// with the same value order Integer, then Fractional, then Composite, and
/// composites sharing a base order by suffix.
///
/// Parsing from text goes through the range tokenizer and so accepts at most
/// [`MAX_DIGITS`](crate::range::MAX_DIGITS) digits per number; the variants can
/// be built directly with any value.
#[derive(Debug, Clone)]
pub enum IssueId {
    /// Standard numbering, and zero or negative specials without a fraction.
    Integer(i64),
    /// A number written with a decimal point, e.g. `-1.5` or `-1.0`.
    Fractional(f64),
    /// A base number with a non-numeric suffix, e.g. `1a` or `1_variant`.
    Composite { base: i64, suffix: String },
}

impl IssueId {
    /// Numeric value used for ordering. Composites use their base.
    pub fn value(&self) -> f64 {
        match self {
            IssueId::Integer(n) => *n as f64,
            IssueId::Fractional(v) => *v,
            IssueId::Composite { base, .. } => *base as f64,
        }
    }

    /// Returns true for positive integers, the issues that take part in
    /// column-aligned grid layout.
    pub fn is_standard(&self) -> bool {
        self.as_standard().is_some()
    }

    /// The issue number if this is a standard (positive integer) issue.
    pub fn as_standard(&self) -> Option<i64> {
        match self {
            IssueId::Integer(n) if *n > 0 => Some(*n),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            IssueId::Integer(_) => 0,
            IssueId::Fractional(_) => 1,
            IssueId::Composite { .. } => 2,
        }
    }

    fn suffix(&self) -> &str {
        match self {
            IssueId::Composite { suffix, .. } => suffix,
            _ => "",
        }
    }
}

impl Ord for IssueId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value()
            .total_cmp(&other.value())
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| self.suffix().cmp(other.suffix()))
    }
}

impl PartialOrd for IssueId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for IssueId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for IssueId {}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueId::Integer(n) => write!(f, "{}", n),
            // Keep the decimal point so `-1.0` reads back as fractional
            IssueId::Fractional(v) if v.fract() == 0.0 => write!(f, "{:.1}", v),
            IssueId::Fractional(v) => write!(f, "{}", v),
            IssueId::Composite { base, suffix } => write!(f, "{}{}", base, suffix),
        }
    }
}

impl FromStr for IssueId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match classify(s.trim()) {
            Ok(Token::Single {
                id,
                ongoing: false,
            }) => Ok(id),
            _ => Err(Error::InvalidIssueId(s.to_string())),
        }
    }
}

impl From<i64> for IssueId {
    fn from(n: i64) -> Self {
        IssueId::Integer(n)
    }
}

impl Serialize for IssueId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IssueId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        // Integers bypass the digit limit so any inserted id reads back
        if let Ok(n) = text.parse::<i64>() {
            return Ok(IssueId::Integer(n));
        }
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "issue_id_tests.rs"]
mod tests;
