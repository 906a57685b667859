// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `longbox grid`: pack issues into fixed-width rows.

use std::io::Write;

use lb_core::RowWidth;

use crate::cli::{OutputFormat, OwnedArgs, RangeArgs};
use crate::colors;
use crate::config::Config;
use crate::display::render_grid;
use crate::error::Result;
use crate::schema::grid::GridOutputJson;

use super::load_issues;

pub fn run(
    range: RangeArgs,
    owned: OwnedArgs,
    width: Option<usize>,
    output: OutputFormat,
    config: &Config,
) -> Result<()> {
    let color = colors::resolve(config.color);
    let stdout = std::io::stdout();
    run_impl(
        &range,
        &owned,
        width,
        output,
        config,
        color,
        &mut stdout.lock(),
    )
}

pub(crate) fn run_impl(
    range: &RangeArgs,
    owned: &OwnedArgs,
    width: Option<usize>,
    output: OutputFormat,
    config: &Config,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let set = load_issues(range, owned, config)?;
    let width = match width {
        Some(width) => RowWidth::new(width)?,
        None => config.row_width()?,
    };

    let layout = crate::time_phase!("pack::layout", set.layout(width));
    tracing::debug!(
        width = width.get(),
        rows = layout.row_count(),
        blanks = layout.blank_count(),
        "packed grid"
    );

    match output {
        OutputFormat::Text => {
            write!(out, "{}", render_grid(&set, &layout, color))?;
            writeln!(out, "{}", set.progress())?;
        }
        OutputFormat::Json => {
            let json = GridOutputJson::new(&set, &layout);
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
