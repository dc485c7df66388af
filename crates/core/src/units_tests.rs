// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn hours(value: f64) -> ValueUnit<DurationUnit> {
    ValueUnit::new(value, DurationUnit::Hours)
}

fn minutes(value: f64) -> ValueUnit<DurationUnit> {
    ValueUnit::new(value, DurationUnit::Minutes)
}

#[parameterized(
    hours_to_minutes = { DurationUnit::Hours, DurationUnit::Minutes, 60.0 },
    days_to_hours = { DurationUnit::Days, DurationUnit::Hours, 24.0 },
    weeks_to_months = { DurationUnit::Weeks, DurationUnit::Months, 0.25 },
    months_to_weeks = { DurationUnit::Months, DurationUnit::Weeks, 4.0 },
    years_to_weeks = { DurationUnit::Years, DurationUnit::Weeks, 48.0 },
    years_to_months = { DurationUnit::Years, DurationUnit::Months, 12.0 },
    months_to_days = { DurationUnit::Months, DurationUnit::Days, 30.0 },
    same_unit = { DurationUnit::Seconds, DurationUnit::Seconds, 1.0 },
)]
fn duration_factors(from: DurationUnit, to: DurationUnit, expected: f64) {
    assert!((from.factor(to) - expected).abs() < 1e-9);
}

#[parameterized(
    km_to_m = { DistanceUnit::Kilometers, DistanceUnit::Meters, 1000.0 },
    m_to_cm = { DistanceUnit::Meters, DistanceUnit::Centimeters, 100.0 },
    mile_to_km = { DistanceUnit::Miles, DistanceUnit::Kilometers, 1.609344 },
    foot_to_inches = { DistanceUnit::Feet, DistanceUnit::Inches, 12.0 },
)]
fn distance_factors(from: DistanceUnit, to: DistanceUnit, expected: f64) {
    assert!((from.factor(to) - expected).abs() < 1e-9);
}

#[test]
fn merged_sums_repeated_units_largest_first() {
    let measure = Measure::new(vec![minutes(10.0), hours(3.0), minutes(5.0)]).merged();
    assert_eq!(measure.values, vec![hours(3.0), minutes(15.0)]);
}

#[test]
fn normalized_value_defaults_to_base_unit() {
    let measure = Measure::new(vec![hours(1.0), minutes(30.0)]);
    assert_eq!(measure.normalized_value(), ValueUnit::new(5400.0, DurationUnit::Seconds));
}

#[test]
fn normalized_value_in_chosen_unit() {
    let measure = Measure::new(vec![hours(1.0), minutes(30.0)]).with_normalized_unit(DurationUnit::Hours);
    assert_eq!(measure.normalized_value(), hours(1.5));
}

#[test]
fn display_joins_values() {
    let measure = Measure::new(vec![hours(3.0), minutes(10.0)]);
    assert_eq!(measure.to_string(), "3 hours, 10 minutes");
    assert_eq!(ValueUnit::new(2.5, DistanceUnit::Kilometers).to_string(), "2.5 kilometers");
}

#[test]
fn serializes_unit_names_in_snake_case() {
    let json = serde_json::to_value(hours(2.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "value": 2.0, "unit": "hours" }));
}

fn grammar() -> Arc<UnitGrammar<DurationUnit>> {
    let mut rules = RuleSet::new();
    let fractions = Fractions::register(&mut rules).unwrap();
    let numerals = Numerals::register(&mut rules).unwrap();
    let words = [
        UnitWords {
            unit: DurationUnit::Hours,
            singular: "ساع[ةه]".to_string(),
            dual: "ساعت[اي]ن".to_string(),
            plural: "ساعات".to_string(),
            abbreviation: None,
            symbol: None,
        },
        UnitWords {
            unit: DurationUnit::Minutes,
            singular: "دقيق[ةه]".to_string(),
            dual: "دقيقت[اي]ن".to_string(),
            plural: "دقائق".to_string(),
            abbreviation: Some("min".to_string()),
            symbol: None,
        },
    ];
    UnitGrammar::register(&mut rules, &words, numerals, fractions).unwrap()
}

#[parameterized(
    numeral_and_plural = { "ثلاث ساعات", hours(3.0) },
    digits_and_singular = { "15 دقيقة", minutes(15.0) },
    abbreviation = { "5 min", minutes(5.0) },
    numeral_and_fraction = { "ساعتين ونصف", hours(2.5) },
    singular_and_fraction = { "ساعة وربع", hours(1.25) },
    fraction_first = { "نصف ساعة", hours(0.5) },
    three_quarters = { "ثلاث أرباع الساعة", hours(0.75) },
    bare_dual = { "دقيقتين", minutes(2.0) },
    bare_singular = { "ساعة", hours(1.0) },
    digits_with_fraction = { "3 ساعات ونص", hours(3.5) },
)]
fn segments(text: &str, expected: ValueUnit<DurationUnit>) {
    let grammar = grammar();
    let segment = grammar.segment();
    let result = segment.search(text).unwrap().unwrap();
    assert_eq!(result.value, Value::DurationUnit(expected));
    assert_eq!(result.body(text), text);
}

#[test]
fn abbreviation_needs_a_numeral() {
    let grammar = grammar();
    let segment = grammar.segment();
    assert!(segment.search("min").unwrap().is_none());
}

#[test]
fn measure_folds_segments() {
    let grammar = grammar();
    let segment = Arc::new(grammar.segment());
    let measure = UnitGrammar::<DurationUnit>::measure(&segment).unwrap();
    let text = "ساعتين و 10 دقائق";
    let result = measure.search(text).unwrap().unwrap();
    assert_eq!(
        result.value,
        Value::Duration(Measure::new(vec![hours(2.0), minutes(10.0)]))
    );
    assert_eq!(result.body(text), text);
}

#[test]
fn unit_of_reads_duals_as_two() {
    let grammar = grammar();
    assert_eq!(grammar.unit_of("ساعتين").unwrap(), hours(2.0));
    assert!(grammar.unit_of("يوم").is_err());
}
