// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is a TOML file with these optional keys:
//! - `dimensions`: dimensions `parse` looks for when none are given
//! - `output`: default output format (`text` or `json`)
//! - `week_start`: first day of the week for time resolution
//! - `log_level`: tracing filter used when `ABAAD_LOG` is unset
//!
//! The first file found wins: `--config <path>`, `./abaad.toml`, then
//! `abaad/config.toml` under the user config directory.

use std::fs;
use std::path::{Path, PathBuf};

use abaad_core::{DimensionType, TimeOptions};
use chrono::Weekday;
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

const LOCAL_CONFIG_NAME: &str = "abaad.toml";
const CONFIG_DIR_NAME: &str = "abaad";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub dimensions: Option<Vec<DimensionType>>,
    pub output: Option<OutputFormat>,
    pub week_start: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Loads the first configuration found, or the defaults.
    ///
    /// An explicit path must exist.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                let config = Self::load(&path)?;
                tracing::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Configured dimensions, or every implemented one.
    pub fn dimensions(&self) -> Vec<DimensionType> {
        match &self.dimensions {
            Some(dimensions) if !dimensions.is_empty() => dimensions.clone(),
            _ => DimensionType::implemented(),
        }
    }

    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    /// Time resolution options; the week starts on Sunday unless configured.
    pub fn time_options(&self) -> Result<TimeOptions> {
        let Some(name) = &self.week_start else {
            return Ok(TimeOptions::default());
        };
        let week_start = name.parse::<Weekday>().map_err(|_| {
            Error::Config(format!(
                "invalid week_start: '{}'\n  hint: use a weekday name such as sunday or monday",
                name
            ))
        })?;
        Ok(TimeOptions { week_start })
    }
}

/// `./abaad.toml`, then the user config directory.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
