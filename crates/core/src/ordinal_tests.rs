// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::numeral::Numerals;
use yare::parameterized;

fn ordinals() -> Arc<Ordinals> {
    let mut rules = RuleSet::new();
    Numerals::register(&mut rules).unwrap();
    Ordinals::register(&mut rules).unwrap()
}

#[parameterized(
    first = { "الأول", 1 },
    first_bare = { "أول", 1 },
    first_bare_feminine = { "أولى", 1 },
    indefinite_teen = { "ثاني عشر", 12 },
    first_feminine = { "الأولى", 1 },
    second = { "الثاني", 2 },
    third_feminine = { "الثالثة", 3 },
    tenth = { "العاشر", 10 },
    eleventh = { "الحادي عشر", 11 },
    twelfth = { "الثاني عشر", 12 },
    nineteenth_feminine = { "التاسعة عشرة", 19 },
    twentieth = { "العشرون", 20 },
    twenty_first = { "الحادي والعشرون", 21 },
    twenty_fifth_colloquial = { "الخامس والعشرين", 25 },
    hundredth = { "المئة", 100 },
)]
fn reduces(text: &str, expected: i64) {
    let ordinals = ordinals();
    let expression = ordinals.expression();
    let result = expression.search(text).unwrap().unwrap();
    assert_eq!(result.value, Value::Integer(expected));
    assert_eq!(result.body(text), text);
}

#[test]
fn finds_ordinal_in_sentence() {
    let text = "جاء في المركز الثالث عشر";
    let ordinals = ordinals();
    let expression = ordinals.expression();
    let result = expression.search(text).unwrap().unwrap();
    assert_eq!(result.value, Value::Integer(13));
}

#[parameterized(
    cardinal = { "ثلاثة" },
    bare_tens = { "عشرون" },
    second_of_time = { "انتظر ثانية" },
    indefinite_third = { "ثالث" },
)]
fn cardinals_are_not_ordinals(text: &str) {
    let ordinals = ordinals();
    let expression = ordinals.expression();
    assert!(expression.search(text).unwrap().is_none());
}

#[test]
fn requires_cardinal_tens() {
    let mut rules = RuleSet::new();
    assert!(matches!(
        Ordinals::register(&mut rules).unwrap_err(),
        crate::Error::UnknownRule(name) if name == "twenty"
    ));
}
