// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn schema_json(cmd: SchemaCommand) -> serde_json::Value {
    let mut out = Vec::new();
    run_impl(cmd, &mut out).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn schema_parse_produces_valid_json() {
    let json = schema_json(SchemaCommand::Parse);
    let text = json.to_string();

    assert!(json.get("$schema").is_some());
    assert_eq!(json["title"], "ParseOutputJson");
    assert!(text.contains("\"TokenErrorJson\""));
    assert!(text.contains("\"malformed_range\""));
}

#[test]
fn schema_parse_has_required_fields() {
    let json = schema_json(SchemaCommand::Parse);
    let required = json["required"].as_array().unwrap();
    for field in ["input", "issues", "ongoing", "errors"] {
        assert!(required.iter().any(|v| v == field), "missing {field}");
    }
}

#[test]
fn schema_grid_includes_nested_types() {
    let text = schema_json(SchemaCommand::Grid).to_string();
    assert!(text.contains("\"CellJson\""));
    assert!(text.contains("\"ProgressJson\""));
    assert!(text.contains("\"IssueKind\""));
}
