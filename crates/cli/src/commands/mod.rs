// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod completion;
pub mod config;
pub mod grid;
pub mod key;
pub mod parse;
pub mod progress;
pub mod schema;

use lb_core::{range, IssueSet, ParseOutcome};

use crate::cli::{OwnedArgs, RangeArgs};
use crate::config::Config;
use crate::error::Result;

/// Parse a range description, applying the strict setting from the flag or
/// the config.
///
/// Rejected tokens are reported as a warning on stderr unless strict mode
/// turns them into an error.
pub fn parse_ranges(args: &RangeArgs, config: &Config) -> Result<ParseOutcome> {
    let outcome = crate::time_phase!("range::parse", range::parse(&args.ranges));
    tracing::debug!(
        input = %outcome.input,
        issues = outcome.issues.len(),
        ongoing = outcome.issues.ongoing,
        "parsed ranges"
    );
    for error in &outcome.errors {
        tracing::debug!(token = %error.token, kind = %error.kind, "rejected token");
    }

    outcome.validate(args.strict || config.strict)?;
    if outcome.has_errors() {
        eprintln!(
            "warning: {}",
            lb_core::Error::UnparseableTokens(outcome.error_tokens())
        );
    }
    Ok(outcome)
}

/// Parse a range description and mark the selected issues owned.
pub fn load_issues(range: &RangeArgs, owned: &OwnedArgs, config: &Config) -> Result<IssueSet> {
    let mut set = parse_ranges(range, config)?.issues;
    apply_owned(&mut set, owned)?;
    Ok(set)
}

/// Mark issues owned from `--owned` / `--all-owned`.
///
/// Selected issues outside the set are reported and otherwise ignored.
pub fn apply_owned(set: &mut IssueSet, owned: &OwnedArgs) -> Result<()> {
    if owned.all_owned {
        set.select_all();
    }
    let Some(selection) = &owned.owned else {
        return Ok(());
    };

    let ids = range::parse_selection(selection)?;
    let missing = set.select(&ids, true);
    tracing::debug!(selected = ids.len(), missing = missing.len(), "applied selection");
    if !missing.is_empty() {
        let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
        eprintln!("warning: not in range, ignored: {}", missing.join(", "));
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
