// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn rules_lists_registration_order() {
    let temp = temp();
    abaad(&temp)
        .args(["rules", "ordinal_"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ordinal_first\nordinal_second\n"));
}

#[test]
fn rules_include_dimensions() {
    let temp = temp();
    abaad(&temp)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("\ntime_interval\n"))
        .stdout(predicate::str::contains("\nnames\n"));
}

#[test]
fn completion_generates_script() {
    let temp = temp();
    abaad(&temp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abaad"));
}
