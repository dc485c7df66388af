// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn digits() -> RuleSet {
    let mut rules = RuleSet::new();
    for (name, pattern, value) in [
        ("one", r"one\b", 1),
        ("two", r"two\b", 2),
        ("three", r"three\b", 3),
        ("ten", r"ten\b", 10),
    ] {
        rules
            .add(name, Expression::value(pattern, Value::Integer(value)))
            .unwrap();
    }
    rules
}

#[test]
fn duplicate_names_are_rejected() {
    let mut rules = digits();
    let err = rules.add("two", Expression::text("2")).unwrap_err();
    assert!(matches!(err, Error::DuplicateRule(name) if name == "two"));
    assert_eq!(rules.len(), 4);
}

#[test]
fn slice_is_inclusive_and_ordered() {
    let rules = digits();
    let ones = rules.slice("one", "three").unwrap();
    assert_eq!(ones.names().collect::<Vec<_>>(), vec!["one", "two", "three"]);
}

#[test]
fn reversed_slice_is_an_error() {
    let rules = digits();
    assert!(matches!(
        rules.slice("three", "one").unwrap_err(),
        Error::InvalidRuleRange { .. }
    ));
}

#[test]
fn unknown_names_are_errors() {
    let rules = digits();
    assert!(matches!(
        rules.slice("one", "nine").unwrap_err(),
        Error::UnknownRule(name) if name == "nine"
    ));
    assert!(rules.expression("zero").is_err());
}

#[parameterized(
    head = { 0..2, 2 },
    clamped = { 2..99, 2 },
    empty = { 3..3, 0 },
)]
fn slice_index_clamps(range: Range<usize>, expected: usize) {
    assert_eq!(digits().slice_index(range).len(), expected);
}

#[test]
fn join_matches_any_member() {
    let rules = digits();
    let joined = rules.slice("one", "ten").unwrap().join();
    let expr = Expression::text(joined);
    assert!(expr.full_match("ten").unwrap().is_some());
    assert!(expr.full_match("eleven").unwrap().is_none());
}

#[test]
fn lookup_returns_first_full_match() {
    let mut rules = RuleSet::new();
    rules
        .add("specific", Expression::value(r"ab", Value::Integer(1)))
        .unwrap();
    rules
        .add("generic", Expression::value(r"a\w", Value::Integer(2)))
        .unwrap();
    let all = rules.slice_index(0..2);
    assert_eq!(all.lookup("ab").unwrap().unwrap().name(), "specific");
    assert_eq!(all.lookup_value("ac").unwrap(), Some(Value::Integer(2)));
    assert!(all.lookup("abc").unwrap().is_none());
}

#[test]
fn tokenizer_reads_words_in_order() {
    let rules = digits();
    let tokenizer = rules.slice("one", "ten").unwrap().tokenizer().unwrap();
    let tokens = tokenizer.tokens("ten and three, then two").unwrap();
    let values: Vec<_> = tokens.iter().map(|t| t.value.clone()).collect();
    assert_eq!(
        values,
        vec![Value::Integer(10), Value::Integer(3), Value::Integer(2)]
    );
    assert_eq!(tokens[1].rule, "three");
    assert_eq!(tokens[1].text, "three");
}

#[test]
fn tokenizer_evaluates_computed_rules() {
    let mut rules = RuleSet::new();
    rules
        .add(
            "number",
            Expression::reduce(r"\d+", |caps, _| {
                let n: i64 = caps[0].parse().unwrap_or_default();
                Ok(Value::Integer(n))
            }),
        )
        .unwrap();
    let tokenizer = rules.slice_index(0..1).tokenizer().unwrap();
    let tokens = tokenizer.tokens("12 and 30").unwrap();
    assert_eq!(tokens[1].value, Value::Integer(30));
    assert_eq!(tokens[1].span, 7..9);
}

#[test]
fn combine_folds_segments_in_textual_order() {
    let rules = digits();
    let combined = rules
        .slice("one", "ten")
        .unwrap()
        .combine(r"(?:\s*,\s*|\s+and\s+)", |values| {
            let text: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            Ok(Value::Text(text.join(" ")))
        })
        .unwrap();
    let result = combined.search("x ten, two and one y").unwrap().unwrap();
    assert_eq!(result.value, Value::Text("10 2 1".into()));
    assert_eq!(result.body("x ten, two and one y"), "ten, two and one");
}

#[test]
fn combine_requires_a_leading_boundary() {
    let rules = digits();
    let combined = rules
        .slice("one", "ten")
        .unwrap()
        .combine(r"\s+", |values| Ok(Value::Integer(values.len() as i64)))
        .unwrap();
    assert!(combined.search("often").unwrap().is_none());
}
