// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn anchor() -> NaiveDateTime {
    parse_anchor("2021-09-01").unwrap()
}

fn rendered(text: &str, dimensions: &[DimensionType], format: OutputFormat) -> String {
    let found = Grammar::global().unwrap().parse_dimension(text, dimensions).unwrap();
    let mut out = Vec::new();
    render(&found, format, anchor(), &TimeOptions::default(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[parameterized(
    date = { "2021-09-01", "2021-09-01 00:00:00" },
    minutes = { "2021-09-01T10:30", "2021-09-01 10:30:00" },
    seconds = { "2021-09-01T10:30:15", "2021-09-01 10:30:15" },
)]
fn parses_anchor(input: &str, expected: &str) {
    assert_eq!(parse_anchor(input).unwrap().to_string(), expected);
}

#[parameterized(
    words = { "tomorrow" },
    slashes = { "01/09/2021" },
    bad_month = { "2021-13-01" },
)]
fn rejects_anchor(input: &str) {
    assert!(matches!(parse_anchor(input), Err(Error::InvalidAnchor(_))));
}

#[test]
fn text_output_has_a_line_per_dimension() {
    let out = rendered("ثلاثة وعشرين", &[DimensionType::Numeral], OutputFormat::Text);
    assert_eq!(out, "numeral\t0..23\tثلاثة وعشرين\t23\n");
}

#[test]
fn text_output_resolves_times() {
    let out = rendered("بعد شهرين", &[DimensionType::Time], OutputFormat::Text);
    assert!(out.starts_with("time\t"));
    assert!(out.trim_end().ends_with("2021-11-01 00:00:00"));
}

#[test]
fn json_output_is_an_array() {
    let out = rendered("بعد شهرين", &[DimensionType::Time], OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["dimension_type"], "time");
    assert_eq!(json[0]["body"], "بعد شهرين");
    assert_eq!(json[0]["value"]["months"], 2);
    assert_eq!(json[0]["resolved"], "2021-11-01T00:00:00");
}

#[test]
fn json_output_skips_resolution_for_other_values() {
    let out = rendered("يومين", &[DimensionType::Duration], OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(json[0].get("resolved").is_none());
    assert_eq!(json[0]["value"]["values"][0]["unit"], "days");
}

#[test]
fn interval_resolves_both_ends() {
    let out = rendered("من الساعة 3 إلى الساعة 5 مساء", &[DimensionType::Time], OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["resolved"]["start"], "2021-09-01T15:00:00");
    assert_eq!(json[0]["resolved"]["end"], "2021-09-01T17:00:00");
}

#[test]
fn unresolvable_time_is_marked_invalid() {
    let out = rendered(
        "ثلاثة كتب الساعة 25",
        &[DimensionType::Numeral, DimensionType::Time],
        OutputFormat::Text,
    );
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("numeral\t"));
    assert!(lines.last().unwrap().starts_with("time\t"));
    assert!(lines.last().unwrap().ends_with("\tinvalid"));
}

#[test]
fn unresolvable_time_is_null_in_json() {
    let out = rendered("الساعة 25", &[DimensionType::Time], OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["value"]["hour"], 25);
    assert!(json[0]["resolved"].is_null());
    assert!(json[0].as_object().unwrap().contains_key("resolved"));
}
