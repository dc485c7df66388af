// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn list_skips_comments_and_blanks() {
    let names = parse_list("# header\n\nعلي\n  عمر  \n# trailing\n");
    assert_eq!(names, vec!["علي", "عمر"]);
}

#[test]
fn list_is_longest_first_without_duplicates() {
    let names = parse_list("عبد\nعبد الله\nعبد\n");
    assert_eq!(names, vec!["عبد الله", "عبد"]);
}

#[test]
fn embedded_list_is_not_empty() {
    let names = names();
    assert!(names.len() > 900);
    assert!(names.contains(&"محمد"));
    assert!(names.contains(&"عبد الرحمن"));
    assert!(names.contains(&"عبدالرحمن"));
    assert!(names.contains(&"أبو خالد"));
}

#[parameterized(
    simple = { "قابلت محمد اليوم", "محمد" },
    compound = { "اتصل عبد الله بالأمس", "عبد الله" },
    feminine = { "وصلت فاطمة", "فاطمة" },
    joined_compound = { "اتصل عبدالرحمن", "عبدالرحمن" },
    kunya = { "جاء أبو خالد", "أبو خالد" },
)]
fn finds_names(text: &str, expected: &str) {
    let expression = expression();
    let result = expression.search(text).unwrap().unwrap();
    assert_eq!(result.body(text), expected);
    assert_eq!(result.value, crate::value::Value::Text(expected.to_string()));
}

#[test]
fn name_inside_a_longer_word_is_not_a_match() {
    let expression = expression_for(&["علي"]);
    assert!(expression.search("عليهم").unwrap().is_none());
}

#[test]
fn name_joined_by_waw_is_not_split() {
    let expression = expression_for(&["سارة", "عمر"]);
    let text = "سارة وعمر";
    let bodies: Vec<&str> = expression
        .parse(text)
        .unwrap()
        .map(|r| r.unwrap().body(text))
        .collect();
    assert_eq!(bodies, vec!["سارة"]);
}

#[test]
fn finds_every_name() {
    let expression = expression_for(&["سارة", "عمر"]);
    let text = "سارة و عمر";
    let bodies: Vec<&str> = expression
        .parse(text)
        .unwrap()
        .map(|r| r.unwrap().body(text))
        .collect();
    assert_eq!(bodies, vec!["سارة", "عمر"]);
}
