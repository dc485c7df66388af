// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use abaad_core::Grammar;

use crate::error::Result;

pub fn run(prefix: Option<&str>) -> Result<()> {
    for name in run_impl(Grammar::global()?, prefix) {
        println!("{name}");
    }
    Ok(())
}

/// Rule names in registration order, filtered by prefix.
pub(crate) fn run_impl<'g>(grammar: &'g Grammar, prefix: Option<&str>) -> Vec<&'g str> {
    grammar
        .rules()
        .names()
        .filter(|name| prefix.is_none_or(|p| name.starts_with(p)))
        .collect()
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
