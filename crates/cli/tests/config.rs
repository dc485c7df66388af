// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn local_config_sets_default_dimensions() {
    let temp = temp_with_config("dimensions = [\"names\"]\n");
    abaad(&temp)
        .args(["parse", "سافر خالد بعد يومين"])
        .assert()
        .success()
        .stdout("names\t9..17\tخالد\tخالد\n");
}

#[test]
fn local_config_sets_output() {
    let temp = temp_with_config("output = \"json\"\n");
    abaad(&temp)
        .args(["parse", "-d", "numeral", "خمسة"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn flag_overrides_configured_output() {
    let temp = temp_with_config("output = \"json\"\n");
    abaad(&temp)
        .args(["parse", "-d", "numeral", "-o", "text", "خمسة"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("numeral\t"));
}

#[test]
fn week_start_changes_week_resolution() {
    let temp = temp_with_config("week_start = \"monday\"\n");
    abaad(&temp)
        .args(["parse", "-d", "time", "--anchor", "2021-09-01", "الأسبوع القادم"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2021-09-06 00:00:00"));
}

#[test]
fn explicit_config_path_wins() {
    let temp = temp_with_config("dimensions = [\"names\"]\n");
    let other = temp.path().join("other.toml");
    std::fs::write(&other, "dimensions = [\"duration\"]\n").unwrap();
    abaad(&temp)
        .arg("--config")
        .arg(&other)
        .args(["parse", "سافر خالد بعد يومين"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("duration\t"));
}

#[test]
fn user_config_dir_is_used_last() {
    let temp = temp();
    let dir = temp.path().join("xdg").join("abaad");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "dimensions = [\"names\"]\n").unwrap();
    abaad(&temp)
        .args(["parse", "قابلت خالد"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("names\t"));
}

#[test]
fn unknown_config_key_fails() {
    let temp = temp_with_config("colour = \"red\"\n");
    abaad(&temp)
        .args(["parse", "خمسة"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = temp();
    abaad(&temp)
        .args(["--config", "missing.toml", "rules"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}
