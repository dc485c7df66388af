// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared pattern primitives.
//!
//! Every word pattern carries a trailing `\b` and no leading one: a leading
//! boundary would fail on a waw connector glued to the next word ("وعشرين").
//! Dimension grammars add a single `\b` at their very start.

use crate::error::Result;
use crate::expression::Expression;
use crate::rule::{RuleCollection, RuleSet};
use crate::value::Value;

/// Taa marbuta, often written as haa.
pub const TAA: &str = "[ةه]";

/// One ASCII, Arabic-Indic or extended Arabic-Indic digit.
pub const DIGIT: &str = "[0-9٠-٩۰-۹]";

/// A run of digits with an optional decimal part.
pub const DIGITS: &str = "[0-9٠-٩۰-۹]+(?:[.٫][0-9٠-٩۰-۹]+)?";

/// The comma and/or waw that joins list items.
pub const WORD_SEPARATOR: &str = r"(?:\s*[،,]\s*و?\s*|\s*و\s*)";

/// Separator between the segments of a multi-unit expression.
pub fn segment_separator() -> String {
    format!(r"(?:{WORD_SEPARATOR}|\s+)")
}

/// `pattern` as a whole word, bounded on the right.
pub fn word(pattern: &str) -> String {
    format!(r"(?:{pattern})\b")
}

/// Non-capturing alternation of `patterns`.
pub fn alternation<I, S>(patterns: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = patterns.into_iter().map(|p| p.as_ref().to_string()).collect();
    format!("(?:{})", parts.join("|"))
}

/// Parses a digit string, accepting Arabic-Indic digits and the Arabic
/// decimal separator.
pub fn parse_digits(text: &str) -> Option<f64> {
    let ascii: String = text.trim().chars().map(normalize_digit).collect();
    ascii.parse().ok()
}

fn normalize_digit(c: char) -> char {
    match c {
        '٠'..='٩' => char::from(b'0' + (c as u32 - '٠' as u32) as u8),
        '۰'..='۹' => char::from(b'0' + (c as u32 - '۰' as u32) as u8),
        '٫' => '.',
        _ => c,
    }
}

/// The fraction words, registered as value rules.
#[derive(Debug, Clone)]
pub struct Fractions {
    rules: RuleCollection,
}

impl Fractions {
    /// Registers `three_quarters`, `half`, `third` and `quarter`.
    pub fn register(rules: &mut RuleSet) -> Result<Self> {
        let table = [
            ("three_quarters", format!(r"ثلاث{TAA}?\s*[أا]رباع"), 0.75),
            ("half", "نص[فّ]?".to_string(), 0.5),
            ("third", "ثلث".to_string(), 1.0 / 3.0),
            ("quarter", "ربع".to_string(), 0.25),
        ];
        for (name, pattern, value) in table {
            rules.add(name, Expression::value(word(&pattern), Value::Float(value)))?;
        }
        Ok(Fractions {
            rules: rules.slice("three_quarters", "quarter")?,
        })
    }

    /// Pattern matching any fraction word.
    pub fn pattern(&self) -> String {
        self.rules.join()
    }

    /// The constant for a fraction word.
    pub fn value(&self, text: &str) -> Result<Option<f64>> {
        Ok(self.rules.lookup_value(text.trim())?.and_then(|v| v.as_f64()))
    }

    pub fn rules(&self) -> &RuleCollection {
        &self.rules
    }
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
