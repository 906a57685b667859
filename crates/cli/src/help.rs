// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let literal = fg(colors::codes::LITERAL);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_issues}
  {parse}       List the issues a range description expands to
  {grid}        Show issues packed into grid rows
  {progress}    Show how much of a title is owned
  {key}         Convert copy/variant labels and storage keys

{header_setup}
  {config}      Show the effective configuration
  {schema}      Output JSON Schema for commands
  {completion}  Generate shell completions",
        header_issues = colors::header("Issues:"),
        header_setup = colors::header("Setup & Configuration:"),
        parse = colors::literal("parse"),
        grid = colors::literal("grid"),
        progress = colors::literal("progress"),
        key = colors::literal("key"),
        config = colors::literal("config"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  longbox parse \"1-20, 22+\"           Expand a range description
  longbox grid 50 --owned 1-12        Grid with issues 1-12 owned
  longbox progress 30+ --owned 1-5    Progress of an ongoing series
  longbox key encode \"2nd Copy\"       Storage key for a label",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
