// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("abaad.toml");
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn loads_every_key() {
    let (_temp, path) = write_config(
        r#"
dimensions = ["duration", "time"]
output = "json"
week_start = "monday"
log_level = "debug"
"#,
    );
    let config = Config::load(&path).unwrap();
    assert_eq!(
        config.dimensions(),
        vec![DimensionType::Duration, DimensionType::Time]
    );
    assert_eq!(config.output(), OutputFormat::Json);
    assert_eq!(config.time_options().unwrap().week_start, Weekday::Mon);
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn defaults_when_empty() {
    let (_temp, path) = write_config("");
    let config = Config::load(&path).unwrap();
    assert_eq!(config.dimensions(), DimensionType::implemented());
    assert_eq!(config.output(), OutputFormat::Text);
    assert_eq!(config.time_options().unwrap().week_start, Weekday::Sun);
}

#[parameterized(
    unknown_key = { "colour = \"red\"" },
    unknown_dimension = { "dimensions = [\"weight\"]" },
    bad_output = { "output = \"xml\"" },
    not_toml = { "dimensions = [" },
)]
fn rejects_invalid_files(content: &str) {
    let (_temp, path) = write_config(content);
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn invalid_week_start_has_hint() {
    let (_temp, path) = write_config("week_start = \"someday\"");
    let err = Config::load(&path).unwrap().time_options().unwrap_err();
    assert!(err.to_string().contains("hint"));
}

#[test]
fn explicit_path_must_exist() {
    let temp = TempDir::new().unwrap();
    let err = Config::discover(Some(&temp.path().join("missing.toml"))).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn candidates_start_with_local_file() {
    assert_eq!(candidate_paths()[0], PathBuf::from("abaad.toml"));
}
