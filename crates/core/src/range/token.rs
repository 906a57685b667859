// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass tokenizer for issue range tokens.
//!
//! Every comma-separated piece of user input is classified exactly once into
//! a [`Token`]. The same classifier backs [`IssueId`]'s `FromStr` and the
//! selection parser, so all three agree on what an identifier looks like.

use crate::issue_id::IssueId;

use super::TokenErrorKind;

/// Maximum number of digits accepted in one number.
///
/// Bounds the size of any expanded range to 10,000 issues.
pub const MAX_DIGITS: usize = 4;

/// Maximum length of a composite suffix after `_`.
const MAX_SUFFIX_LEN: usize = 24;

/// A classified token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// One identifier. `ongoing` is set when it carried a trailing `+`.
    Single { id: IssueId, ongoing: bool },
    /// An inclusive range of integers, already order-normalized.
    Range { start: i64, end: i64, ongoing: bool },
}

/// Recognize the count shorthand: a bare positive number, optionally `+`.
///
/// Returns the count and whether the series is ongoing.
pub(crate) fn count_shorthand(input: &str) -> Option<(i64, bool)> {
    let (body, ongoing) = strip_ongoing(input);
    if body.is_empty()
        || body.len() > MAX_DIGITS
        || body.starts_with('0')
        || !body.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    body.parse().ok().map(|count| (count, ongoing))
}

/// Classify one trimmed token.
pub(crate) fn classify(token: &str) -> Result<Token, TokenErrorKind> {
    let (body, ongoing) = strip_ongoing(token);
    let (negative, unsigned) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    let Some((digits, rest)) = split_digits(unsigned) else {
        return Err(failure_kind(token));
    };
    let magnitude: i64 = digits.parse().map_err(|_| failure_kind(token))?;
    let value = if negative { -magnitude } else { magnitude };

    if rest.is_empty() {
        if negative && ongoing {
            return Err(TokenErrorKind::Unparseable);
        }
        return Ok(Token::Single {
            id: IssueId::Integer(value),
            ongoing,
        });
    }

    if let Some(fraction) = rest.strip_prefix('.') {
        let valid = negative
            && !ongoing
            && (1..=2).contains(&fraction.len())
            && fraction.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(failure_kind(token));
        }
        let value: f64 = body.parse().map_err(|_| TokenErrorKind::Unparseable)?;
        return Ok(Token::Single {
            id: IssueId::Fractional(value),
            ongoing: false,
        });
    }

    if let Some(end) = rest.trim_start().strip_prefix('-') {
        if negative {
            return Err(TokenErrorKind::MalformedRange);
        }
        return match split_digits(end.trim_start()) {
            Some((end_digits, "")) => {
                let end: i64 = end_digits
                    .parse()
                    .map_err(|_| TokenErrorKind::MalformedRange)?;
                Ok(Token::Range {
                    start: value.min(end),
                    end: value.max(end),
                    ongoing,
                })
            }
            _ => Err(TokenErrorKind::MalformedRange),
        };
    }

    if !ongoing && is_suffix(rest) {
        return Ok(Token::Single {
            id: IssueId::Composite {
                base: value,
                suffix: rest.to_string(),
            },
            ongoing: false,
        });
    }

    Err(failure_kind(token))
}

fn strip_ongoing(s: &str) -> (&str, bool) {
    match s.strip_suffix('+') {
        Some(rest) => (rest, true),
        None => (s, false),
    }
}

/// Split leading ASCII digits from the rest.
///
/// Returns `None` when there are no digits or more than [`MAX_DIGITS`].
fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 || end > MAX_DIGITS {
        return None;
    }
    Some(s.split_at(end))
}

/// One or two letters (`1a`, `12bc`), or `_` and alphanumerics (`1_variant`).
fn is_suffix(s: &str) -> bool {
    if let Some(tail) = s.strip_prefix('_') {
        return tail.len() <= MAX_SUFFIX_LEN && tail.bytes().all(|b| b.is_ascii_alphanumeric());
    }
    (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// A dash after the first character marks an attempted range.
fn failure_kind(token: &str) -> TokenErrorKind {
    if token.char_indices().any(|(i, c)| c == '-' && i > 0) {
        TokenErrorKind::MalformedRange
    } else {
        TokenErrorKind::Unparseable
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
