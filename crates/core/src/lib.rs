// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lb-core: issue-range parsing and grid layout for comic collections.
//!
//! This crate turns a free-form description of which issues of a title exist
//! (`"1-20, 22-24, 28-30+"`, `"-1, -1.5"`) into an ordered [`IssueSet`], and
//! lays the identifiers out into fixed-width rows for display.
//!
//! ```
//! use lb_core::{pack, range, RowWidth};
//!
//! let outcome = range::parse("1-3, 5");
//! let ids: Vec<_> = outcome.issues.ids().cloned().collect();
//! let slots = pack::pack(&ids, RowWidth::default());
//! assert_eq!(slots.len(), 10);
//! ```

pub mod error;
pub mod extra_key;
pub mod issue_id;
pub mod issue_set;
pub mod pack;
pub mod range;
pub mod record;

pub use error::{Error, Result};
pub use extra_key::ExtraKind;
pub use issue_id::IssueId;
pub use issue_set::{IssueSet, Progress};
pub use pack::{Layout, RowWidth, Slot};
pub use range::{ParseOutcome, TokenError, TokenErrorKind};
pub use record::{Extra, IssueRecord};
