// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    ascii = { "42", 42.0 },
    arabic_indic = { "١٢", 12.0 },
    extended = { "۲۵", 25.0 },
    arabic_decimal = { "٣٫٥", 3.5 },
    ascii_decimal = { "2.5", 2.5 },
)]
fn parse_digits_normalizes(text: &str, expected: f64) {
    assert_eq!(parse_digits(text), Some(expected));
}

#[test]
fn parse_digits_rejects_words() {
    assert_eq!(parse_digits("ثلاثة"), None);
}

#[parameterized(
    waw = { " و " },
    glued_waw = { "و" },
    comma = { "، " },
    comma_and_waw = { ", و" },
)]
fn word_separator_matches(text: &str) {
    let expr = Expression::text(WORD_SEPARATOR);
    assert!(expr.full_match(text).unwrap().is_some());
}

#[test]
fn word_is_right_bounded() {
    let expr = Expression::text(word("يوم"));
    assert!(expr.search("يومين").unwrap().is_none());
    assert!(expr.search("كل يوم").unwrap().is_some());
}

#[parameterized(
    half = { "نص", 0.5 },
    half_full = { "نصف", 0.5 },
    third = { "ثلث", 1.0 / 3.0 },
    quarter = { "ربع", 0.25 },
    three_quarters = { "ثلاث ارباع", 0.75 },
    three_quarters_feminine = { "ثلاثة أرباع", 0.75 },
)]
fn fraction_constants(text: &str, expected: f64) {
    let mut rules = RuleSet::new();
    let fractions = Fractions::register(&mut rules).unwrap();
    assert_eq!(fractions.value(text).unwrap(), Some(expected));
}

#[test]
fn fraction_pattern_rejects_other_words() {
    let mut rules = RuleSet::new();
    let fractions = Fractions::register(&mut rules).unwrap();
    assert_eq!(fractions.value("ثلاث").unwrap(), None);
    assert_eq!(rules.len(), 4);
}
