// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use abaad_core::clean::{self, CharClass, Normalization};

use crate::error::Result;

use super::read_input;

pub fn run(text: Option<String>, remove: &[String], keep: &[String], normalize: &[String]) -> Result<()> {
    let text = read_input(text)?;
    println!("{}", run_impl(&text, remove, keep, normalize)?);
    Ok(())
}

/// Normalizes, then removes, then keeps.
pub(crate) fn run_impl(text: &str, remove: &[String], keep: &[String], normalize: &[String]) -> Result<String> {
    let remove = parse_all::<CharClass>(remove)?;
    let keep = parse_all::<CharClass>(keep)?;
    let normalize = parse_all::<Normalization>(normalize)?;
    if remove.is_empty() && keep.is_empty() && normalize.is_empty() {
        return Err(abaad_core::Error::NoCleaningOption.into());
    }

    let mut cleaned = text.to_string();
    if !normalize.is_empty() {
        cleaned = clean::normalize(&cleaned, &normalize)?;
    }
    if !remove.is_empty() {
        cleaned = clean::remove(&cleaned, &remove)?;
    }
    if !keep.is_empty() {
        cleaned = clean::keep(&cleaned, &keep)?;
    }
    Ok(cleaned)
}

fn parse_all<T>(names: &[String]) -> Result<Vec<T>>
where
    T: std::str::FromStr<Err = abaad_core::Error>,
{
    Ok(names
        .iter()
        .map(|name| name.parse::<T>())
        .collect::<abaad_core::Result<Vec<_>>>()?)
}

#[cfg(test)]
#[path = "clean_tests.rs"]
mod tests;
