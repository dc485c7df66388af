// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn parse_duration_as_text() {
    let temp = temp();
    abaad(&temp)
        .args(["parse", "-d", "duration", "3 ساعات و10 دقايق"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("duration\t0.."))
        .stdout(predicate::str::contains("3 hours, 10 minutes"));
}

#[test]
fn parse_time_resolves_against_anchor() {
    let temp = temp();
    abaad(&temp)
        .args(["parse", "-d", "time", "--anchor", "2021-09-01", "بعد شهرين"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2021-11-01 00:00:00"));
}

#[test]
fn parse_reads_stdin() {
    let temp = temp();
    abaad(&temp)
        .args(["parse", "-d", "numeral"])
        .write_stdin("ثلاثة وعشرين")
        .assert()
        .success()
        .stdout(predicate::str::contains("\t23\n"));
}

#[test]
fn parse_json_output() {
    let temp = temp();
    let output = abaad(&temp)
        .args(["parse", "-d", "distance", "-o", "json", "نصف كيلو متر"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["dimension_type"], "distance");
    assert_eq!(json[0]["value"]["values"][0]["value"], 0.5);
    assert_eq!(json[0]["value"]["values"][0]["unit"], "kilometers");
}

#[test]
fn parse_without_matches_prints_nothing() {
    let temp = temp();
    abaad(&temp)
        .args(["parse", "-d", "duration", "مرحبا بكم"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn parse_unimplemented_dimension_fails() {
    let temp = temp();
    abaad(&temp)
        .args(["parse", "-d", "volume", "لتر"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: dimension not implemented: volume"));
}

#[test]
fn parse_unknown_dimension_lists_valid_names() {
    let temp = temp();
    abaad(&temp)
        .args(["parse", "-d", "weight", "نص"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hint: valid dimensions are"));
}

#[test]
fn parse_invalid_anchor_fails() {
    let temp = temp();
    abaad(&temp)
        .args(["parse", "--anchor", "yesterday", "بكرة"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid anchor"));
}

#[test]
fn parse_empty_input_fails() {
    let temp = temp();
    abaad(&temp)
        .arg("parse")
        .write_stdin("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input text"));
}

#[test]
fn debug_log_goes_to_stderr() {
    let temp = temp();
    abaad(&temp)
        .env("ABAAD_LOG", "abaad_core=debug")
        .args(["parse", "-d", "numeral", "خمسة"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built grammar").not())
        .stderr(predicate::str::contains("built grammar"));
}

#[test]
fn parse_keeps_going_past_an_invalid_time() {
    let temp = temp();
    abaad(&temp)
        .args(["parse", "-d", "numeral,time", "--anchor", "2021-09-01", "عندي ثلاثة كتب الساعة 25"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("numeral\t"))
        .stdout(predicate::str::ends_with("\tinvalid\n"));
}
