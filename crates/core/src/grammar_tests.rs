// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use crate::time::TimeOptions;
use crate::units::{DistanceUnit, DurationUnit, ValueUnit};
use crate::value::Value;
use chrono::NaiveDate;
use yare::parameterized;

fn grammar() -> &'static Grammar {
    Grammar::global().unwrap()
}

#[test]
fn global_is_built_once() {
    assert!(std::ptr::eq(grammar(), Grammar::global().unwrap()));
}

#[test]
fn hours_and_minutes_scenario() {
    let found = parse_dimension("3 ساعات و10 دقايق", &[DimensionType::Duration]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].dimension_type, DimensionType::Duration);
    match &found[0].value {
        Value::Duration(measure) => assert_eq!(
            measure.values,
            vec![
                ValueUnit::new(3.0, DurationUnit::Hours),
                ValueUnit::new(10.0, DurationUnit::Minutes),
            ]
        ),
        other => panic!("not a duration: {other:?}"),
    }
}

#[test]
fn dual_days_and_quarter_scenario() {
    let found = parse_dimension("يومين وربع", &[DimensionType::Duration]).unwrap();
    assert_eq!(found.len(), 1);
    match &found[0].value {
        Value::Duration(measure) => {
            assert_eq!(measure.values, vec![ValueUnit::new(2.25, DurationUnit::Days)]);
        }
        other => panic!("not a duration: {other:?}"),
    }
}

#[test]
fn in_two_months_scenario() {
    let found = parse_dimension("بعد شهرين", &[DimensionType::Time]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].body, "بعد شهرين");
    let anchor = NaiveDate::from_ymd_opt(2021, 9, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let resolved = found[0]
        .value
        .as_time()
        .unwrap()
        .resolve(anchor, &TimeOptions::default())
        .unwrap();
    assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2021, 11, 1).unwrap());
}

#[test]
fn compound_numeral_scenario() {
    let found = parse_dimension("ثلاثة وعشرين", &[DimensionType::Numeral]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].value, Value::Integer(23));
}

#[test]
fn half_kilometer_scenario() {
    let found = parse_dimension("نصف كيلو متر", &[DimensionType::Distance]).unwrap();
    assert_eq!(found.len(), 1);
    match &found[0].value {
        Value::Distance(measure) => {
            assert_eq!(measure.values, vec![ValueUnit::new(0.5, DistanceUnit::Kilometers)]);
            assert_eq!(measure.normalized_value(), ValueUnit::new(500.0, DistanceUnit::Meters));
        }
        other => panic!("not a distance: {other:?}"),
    }
}

#[parameterized(
    ordinal = { "الفصل الثالث", DimensionType::Ordinal, "الثالث" },
    names = { "قابلت خالد", DimensionType::Names, "خالد" },
    numeral_digits = { "عندي 42 كتاب", DimensionType::Numeral, "42" },
)]
fn finds_single_dimension(text: &str, dimension: DimensionType, body: &str) {
    let found = parse_dimension(text, &[dimension]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].body, body);
    assert_eq!(&text[found[0].start..found[0].end], body);
}

#[test]
fn no_dimension_requested_fails() {
    let err = parse_dimension("بعد شهرين", &[]).unwrap_err();
    assert!(matches!(err, Error::NoDimensionRequested));
}

#[parameterized(
    money = { DimensionType::AmountOfMoney },
    quantity = { DimensionType::Quantity },
    temperature = { DimensionType::Temperature },
    volume = { DimensionType::Volume },
)]
fn unimplemented_dimension_fails(dimension: DimensionType) {
    let err = parse_dimension("بعد شهرين", &[DimensionType::Time, dimension]).unwrap_err();
    assert!(matches!(err, Error::NotImplemented(d) if d == dimension));
}

#[test]
fn no_match_is_empty() {
    let found = parse_dimension("مرحبا بكم", &[DimensionType::Duration]).unwrap();
    assert!(found.is_empty());
}

#[test]
fn results_follow_request_order() {
    let found = parse_dimension("بعد ساعتين", &[DimensionType::Duration, DimensionType::Time]).unwrap();
    let kinds: Vec<DimensionType> = found.iter().map(|d| d.dimension_type).collect();
    assert_eq!(kinds, vec![DimensionType::Duration, DimensionType::Time]);
    assert_eq!(found[0].body, "ساعتين");
    assert_eq!(found[1].body, "بعد ساعتين");
}

#[test]
fn repeated_dimension_is_parsed_once() {
    let found = parse_dimension("ساعتين", &[DimensionType::Duration, DimensionType::Duration]).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn single_dimension_is_sorted_by_start() {
    let text = "اليوم حتى الساعة 6";
    let found = parse_dimension(text, &[DimensionType::Time]).unwrap();
    let bodies: Vec<&str> = found.iter().map(|d| d.body.as_str()).collect();
    assert_eq!(bodies, vec!["اليوم", "حتى الساعة 6"]);
    assert!(found.windows(2).all(|w| w[0].end <= w[1].start));
}

#[test]
fn interval_claims_its_span() {
    let found = parse_dimension("من الساعة 3 إلى الساعة 5 مساء", &[DimensionType::Time]).unwrap();
    assert_eq!(found.len(), 1);
    assert!(matches!(found[0].value, Value::Interval(_)));
}

#[test]
fn parse_covers_every_implemented_dimension() {
    let found = parse("سافر خالد بعد يومين").unwrap();
    let kinds: Vec<DimensionType> = found.iter().map(|d| d.dimension_type).collect();
    assert!(kinds.contains(&DimensionType::Duration));
    assert!(kinds.contains(&DimensionType::Time));
    assert!(kinds.contains(&DimensionType::Names));
}

#[test]
fn rules_include_top_level_dimensions() {
    let names: Vec<&str> = grammar().rules().names().collect();
    for name in ["numeral", "ordinal", "duration", "distance", "time", "time_interval", "time_until", "names"] {
        assert!(names.contains(&name), "missing rule {name}");
    }
}

#[test]
fn unimplemented_group_is_an_error() {
    let err = grammar().group(DimensionType::Volume).unwrap_err();
    assert!(matches!(err, Error::NotImplemented(DimensionType::Volume)));
}
