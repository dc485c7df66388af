// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Personal names from an embedded list.

use crate::expression::Expression;

const NAMES: &str = include_str!("../data/names.txt");

/// Parses a name list: one name per line, `#` starts a comment line.
///
/// Names come back longest first and without duplicates, so that an
/// alternation built from them prefers "عبد الله" over a shorter prefix.
pub fn parse_list(list: &str) -> Vec<&str> {
    let mut names: Vec<&str> = list
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    names.dedup();
    names
}

/// The embedded name list.
pub fn names() -> Vec<&'static str> {
    parse_list(NAMES)
}

/// A word-bounded alternation of `names`; value is the matched text.
pub fn expression_for(names: &[&str]) -> Expression {
    let alternatives: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
    Expression::text(format!(r"\b(?:{})\b", alternatives.join("|")))
}

/// The names dimension over the embedded list.
pub fn expression() -> Expression {
    expression_for(&names())
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;
