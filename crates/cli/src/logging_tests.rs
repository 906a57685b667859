// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tracing_subscriber::filter::LevelFilter;
use yare::parameterized;

#[parameterized(
    warn = { "warn", LevelFilter::WARN },
    debug = { "debug", LevelFilter::DEBUG },
    off = { "off", LevelFilter::OFF },
)]
fn level_directive_sets_max_level(directive: &str, expected: LevelFilter) {
    assert_eq!(build_filter(directive).max_level_hint(), Some(expected));
}

#[test]
fn init_twice_does_not_panic() {
    init();
    init();
}
