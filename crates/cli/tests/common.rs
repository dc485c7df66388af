// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary, isolated from any user configuration and log filter.
pub fn abaad(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("abaad");
    cmd.current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .env("HOME", temp.path())
        .env_remove("ABAAD_LOG");
    cmd
}

/// A temp directory to run the binary in.
pub fn temp() -> TempDir {
    TempDir::new().unwrap()
}

/// A temp directory holding `abaad.toml` with `content`.
pub fn temp_with_config(content: &str) -> TempDir {
    let temp = temp();
    std::fs::write(temp.path().join("abaad.toml"), content).unwrap();
    temp
}
