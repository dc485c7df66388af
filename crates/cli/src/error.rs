// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the abaad CLI.
///
/// Errors from the parsing engine pass through unchanged, hints included.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] abaad_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid anchor: '{0}'\n  hint: use YYYY-MM-DD, YYYY-MM-DDTHH:MM or YYYY-MM-DDTHH:MM:SS")]
    InvalidAnchor(String),

    #[error("no input text\n  hint: pass the text as an argument or pipe it on stdin")]
    NoInput,
}

/// A specialized Result type for abaad CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
