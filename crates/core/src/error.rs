// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for abaad-core operations.

use thiserror::Error;

use crate::dimension::DimensionType;

/// All possible errors that can occur in abaad-core operations.
///
/// Grammar construction errors surface once, when a [`Grammar`](crate::Grammar)
/// is built. Usage errors surface per call. A text without matches is never an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate rule name: '{0}'\n  hint: every rule in a grammar must have a unique name")]
    DuplicateRule(String),

    #[error("unknown rule: '{0}'")]
    UnknownRule(String),

    #[error("invalid rule range: '{start}' is registered after '{end}'")]
    InvalidRuleRange { start: String, end: String },

    #[error("invalid pattern: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern declares no capture group: {0}\n  hint: use a text or value expression for patterns without groups")]
    MissingCaptureGroup(String),

    #[error("no dimension requested\n  hint: valid dimensions are: {}", DimensionType::valid_names())]
    NoDimensionRequested,

    #[error("no cleaning option given\n  hint: pass at least one character class or normalization")]
    NoCleaningOption,

    #[error("invalid operator: '{0}'\n  hint: valid operators are: and, or")]
    InvalidOperator(String),

    #[error("unknown dimension: '{0}'\n  hint: valid dimensions are: {hint}", hint = DimensionType::valid_names())]
    UnknownDimension(String),

    #[error("unknown character class: '{0}'\n  hint: valid classes are: {hint}", hint = crate::clean::CharClass::valid_names())]
    UnknownCharClass(String),

    #[error("unknown normalization: '{0}'\n  hint: valid normalizations are: {hint}", hint = crate::clean::Normalization::valid_names())]
    UnknownNormalization(String),

    #[error("dimension not implemented: {0}")]
    NotImplemented(DimensionType),

    #[error("time out of range: {reason}")]
    TimeOutOfRange { reason: String },
}

/// A specialized Result type for abaad-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
