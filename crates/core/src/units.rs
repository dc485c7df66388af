// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quantities with units, and the grammar shared by unit dimensions.
//!
//! Conversions use fixed calendar approximations (a month is 30 days, a
//! year 365 days) and are not calendar-exact.

use std::fmt;
use std::sync::Arc;

use regex::Captures;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::expression::Expression;
use crate::numeral::Numerals;
use crate::patterns::{alternation, segment_separator, word, Fractions};
use crate::rule::{combine_patterns, RuleCollection, RuleSet};
use crate::value::{format_number, Value};

/// A closed set of units for one dimension.
pub trait Unit:
    Copy + PartialEq + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    /// Unit `normalized_value` converts to by default.
    const BASE: Self;

    /// Size in base units; orders units by magnitude.
    fn magnitude(self) -> f64;

    /// Multiplier turning a quantity in `self` into one in `to`.
    fn factor(self, to: Self) -> f64 {
        self.magnitude() / to.magnitude()
    }

    fn into_value(vu: ValueUnit<Self>) -> Value;

    fn from_value(value: &Value) -> Option<ValueUnit<Self>>;

    fn measure_value(measure: Measure<Self>) -> Value;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Seconds => "seconds",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }

    /// The next smaller unit and how many of it make one of `self`.
    pub fn smaller(self) -> Option<(DurationUnit, f64)> {
        match self {
            DurationUnit::Years => Some((DurationUnit::Months, 12.0)),
            DurationUnit::Months => Some((DurationUnit::Days, 30.0)),
            DurationUnit::Weeks => Some((DurationUnit::Days, 7.0)),
            DurationUnit::Days => Some((DurationUnit::Hours, 24.0)),
            DurationUnit::Hours => Some((DurationUnit::Minutes, 60.0)),
            DurationUnit::Minutes => Some((DurationUnit::Seconds, 60.0)),
            DurationUnit::Seconds => None,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Unit for DurationUnit {
    const BASE: Self = DurationUnit::Seconds;

    fn magnitude(self) -> f64 {
        match self {
            DurationUnit::Seconds => 1.0,
            DurationUnit::Minutes => 60.0,
            DurationUnit::Hours => 3_600.0,
            DurationUnit::Days => 86_400.0,
            DurationUnit::Weeks => 604_800.0,
            DurationUnit::Months => 2_592_000.0,
            DurationUnit::Years => 31_536_000.0,
        }
    }

    fn factor(self, to: Self) -> f64 {
        use DurationUnit::{Months, Weeks, Years};
        match (self, to) {
            (Weeks, Months) => 1.0 / 4.0,
            (Months, Weeks) => 4.0,
            (Years, Weeks) => 48.0,
            (Weeks, Years) => 1.0 / 48.0,
            (Years, Months) => 12.0,
            (Months, Years) => 1.0 / 12.0,
            _ => self.magnitude() / to.magnitude(),
        }
    }

    fn into_value(vu: ValueUnit<Self>) -> Value {
        Value::DurationUnit(vu)
    }

    fn from_value(value: &Value) -> Option<ValueUnit<Self>> {
        match value {
            Value::DurationUnit(vu) => Some(*vu),
            _ => None,
        }
    }

    fn measure_value(measure: Measure<Self>) -> Value {
        Value::Duration(measure)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Decimeters,
    Feet,
    Inches,
    Yards,
    Miles,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Meters => "meters",
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Centimeters => "centimeters",
            DistanceUnit::Millimeters => "millimeters",
            DistanceUnit::Decimeters => "decimeters",
            DistanceUnit::Feet => "feet",
            DistanceUnit::Inches => "inches",
            DistanceUnit::Yards => "yards",
            DistanceUnit::Miles => "miles",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Unit for DistanceUnit {
    const BASE: Self = DistanceUnit::Meters;

    fn magnitude(self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::Centimeters => 0.01,
            DistanceUnit::Millimeters => 0.001,
            DistanceUnit::Decimeters => 0.1,
            DistanceUnit::Feet => 0.3048,
            DistanceUnit::Inches => 0.0254,
            DistanceUnit::Yards => 0.9144,
            DistanceUnit::Miles => 1609.344,
        }
    }

    fn into_value(vu: ValueUnit<Self>) -> Value {
        Value::DistanceUnit(vu)
    }

    fn from_value(value: &Value) -> Option<ValueUnit<Self>> {
        match value {
            Value::DistanceUnit(vu) => Some(*vu),
            _ => None,
        }
    }

    fn measure_value(measure: Measure<Self>) -> Value {
        Value::Distance(measure)
    }
}

/// A quantity in one unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueUnit<U> {
    pub value: f64,
    pub unit: U,
}

impl<U: Unit> ValueUnit<U> {
    pub fn new(value: f64, unit: U) -> Self {
        ValueUnit { value, unit }
    }

    pub fn convert(self, to: U) -> Self {
        ValueUnit::new(self.value * self.unit.factor(to), to)
    }
}

impl<U: Unit> fmt::Display for ValueUnit<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit)
    }
}

/// Several quantities written together ("3 hours and 10 minutes").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure<U> {
    pub values: Vec<ValueUnit<U>>,
    pub normalized_unit: U,
}

pub type DurationValue = Measure<DurationUnit>;
pub type DistanceValue = Measure<DistanceUnit>;

impl<U: Unit> Measure<U> {
    pub fn new(values: Vec<ValueUnit<U>>) -> Self {
        Measure {
            values,
            normalized_unit: U::BASE,
        }
    }

    pub fn with_normalized_unit(mut self, unit: U) -> Self {
        self.normalized_unit = unit;
        self
    }

    /// Repeated units summed, largest unit first.
    pub fn merged(self) -> Self {
        let mut values: Vec<ValueUnit<U>> = Vec::new();
        for vu in self.values {
            match values.iter_mut().find(|v| v.unit == vu.unit) {
                Some(existing) => existing.value += vu.value,
                None => values.push(vu),
            }
        }
        values.sort_by(|a, b| b.unit.magnitude().total_cmp(&a.unit.magnitude()));
        Measure {
            values,
            normalized_unit: self.normalized_unit,
        }
    }

    /// The whole measure expressed in `normalized_unit`.
    pub fn normalized_value(&self) -> ValueUnit<U> {
        let total = self
            .values
            .iter()
            .map(|vu| vu.convert(self.normalized_unit).value)
            .sum();
        ValueUnit::new(total, self.normalized_unit)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<U: Unit> fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|vu| vu.to_string()).collect();
        f.write_str(&parts.join(", "))
    }
}

/// Spellings of one unit.
#[derive(Debug, Clone)]
pub struct UnitWords<U> {
    pub unit: U,
    pub singular: String,
    pub dual: String,
    pub plural: String,
    /// Only accepted right after a numeral.
    pub abbreviation: Option<String>,
    /// Latin symbol, only accepted glued to a numeral (`12km`).
    pub symbol: Option<String>,
}

impl<U> UnitWords<U> {
    pub fn new(unit: U, singular: impl Into<String>, dual: impl Into<String>, plural: impl Into<String>) -> Self {
        UnitWords {
            unit,
            singular: singular.into(),
            dual: dual.into(),
            plural: plural.into(),
            abbreviation: None,
            symbol: None,
        }
    }

    pub fn abbreviation(mut self, pattern: impl Into<String>) -> Self {
        self.abbreviation = Some(pattern.into());
        self
    }

    pub fn symbol(mut self, pattern: impl Into<String>) -> Self {
        self.symbol = Some(pattern.into());
        self
    }
}

/// Unit words of one dimension and the segment grammar built on them.
///
/// A segment is, by priority: numeral + plural/singular/abbreviation (or a
/// symbol glued to it) with an optional "و + fraction"; singular or dual + "و + fraction";
/// fraction + singular; bare dual; bare singular.
#[derive(Debug)]
pub struct UnitGrammar<U> {
    words: RuleCollection,
    singular: RuleCollection,
    dual: RuleCollection,
    plural: RuleCollection,
    abbreviation: RuleCollection,
    symbol: RuleCollection,
    numerals: Arc<Numerals>,
    fractions: Fractions,
    unit: std::marker::PhantomData<U>,
}

impl<U: Unit> UnitGrammar<U> {
    /// Registers `<name>_singular`, `<name>_dual`, `<name>_plural` and
    /// `<name>_abbreviation` and `<name>_symbol` for every unit.
    pub fn register(
        rules: &mut RuleSet,
        words: &[UnitWords<U>],
        numerals: Arc<Numerals>,
        fractions: Fractions,
    ) -> Result<Arc<Self>> {
        let mut singular = Vec::new();
        let mut dual = Vec::new();
        let mut plural = Vec::new();
        let mut abbreviation = Vec::new();
        let mut symbol = Vec::new();
        for w in words {
            let name = w.unit.to_string();
            let one = U::into_value(ValueUnit::new(1.0, w.unit));
            let two = U::into_value(ValueUnit::new(2.0, w.unit));
            rules.add(format!("{name}_singular"), Expression::value(word(&w.singular), one.clone()))?;
            singular.push(format!("{name}_singular"));
            rules.add(format!("{name}_dual"), Expression::value(word(&w.dual), two))?;
            dual.push(format!("{name}_dual"));
            rules.add(format!("{name}_plural"), Expression::value(word(&w.plural), one.clone()))?;
            plural.push(format!("{name}_plural"));
            if let Some(abbr) = &w.abbreviation {
                rules.add(format!("{name}_abbreviation"), Expression::value(word(abbr), one.clone()))?;
                abbreviation.push(format!("{name}_abbreviation"));
            }
            if let Some(sym) = &w.symbol {
                rules.add(format!("{name}_symbol"), Expression::value(word(sym), one))?;
                symbol.push(format!("{name}_symbol"));
            }
        }
        let collect = |names: &[String]| {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            rules.collect(&names)
        };
        let singular = collect(&singular)?;
        let dual = collect(&dual)?;
        let plural = collect(&plural)?;
        let abbreviation = collect(&abbreviation)?;
        let symbol = collect(&symbol)?;
        let words = dual
            .clone()
            .chain(&singular)
            .chain(&plural)
            .chain(&abbreviation)
            .chain(&symbol);
        Ok(Arc::new(UnitGrammar {
            words,
            singular,
            dual,
            plural,
            abbreviation,
            symbol,
            numerals,
            fractions,
            unit: std::marker::PhantomData,
        }))
    }

    /// One segment with named groups for each branch.
    pub fn segment_pattern(&self) -> String {
        let numeral = self.numerals.pattern();
        let fraction = self.fractions.pattern();
        let mut after = vec![self.plural.join(), self.singular.join()];
        if !self.abbreviation.is_empty() {
            after.push(self.abbreviation.join());
        }
        let after = alternation(after);
        let unit_n = if self.symbol.is_empty() {
            format!(r"\s*(?P<unit_n>{after})")
        } else {
            format!(r"(?:\s*(?P<unit_n>{after})|(?P<unit_s>{}))", self.symbol.join())
        };
        let singular = self.singular.join();
        let singular_or_dual = alternation([singular.clone(), self.dual.join()]);
        let dual_or_singular = alternation([self.dual.join(), singular.clone()]);
        format!(
            r"(?P<num>{numeral}){unit_n}(?:\s*و\s*(?P<frac_n>{fraction}))?|(?P<unit_f>{singular_or_dual})\s*و\s*(?P<post>{fraction})|(?P<pre>{fraction})\s+(?:ال)?(?P<unit_p>{singular})|(?P<unit_b>{dual_or_singular})"
        )
    }

    /// Expression for a single segment; its value is one [`ValueUnit`].
    pub fn segment(self: &Arc<Self>) -> Expression {
        let grammar = Arc::clone(self);
        Expression::reduce(self.segment_pattern(), move |caps, _| {
            grammar.reduce_segment(caps).map(U::into_value)
        })
    }

    /// Expression for a whole measure, folding segments into a [`Measure`].
    pub fn measure(segment: &Arc<Expression>) -> Result<Expression> {
        combine_patterns(&[Arc::clone(segment)], &segment_separator(), |values| {
            let measure = Measure::new(values.iter().filter_map(U::from_value).collect());
            Ok(U::measure_value(measure.merged()))
        })
    }

    fn reduce_segment(&self, caps: &Captures<'_>) -> Result<ValueUnit<U>> {
        if let Some(num) = caps.name("num") {
            let count = self.numerals.reduce(num.as_str())?;
            let unit_text = caps.name("unit_n").or_else(|| caps.name("unit_s"));
            let unit = self.unit_of(unit_text.map_or("", |m| m.as_str()))?;
            let fraction = match caps.name("frac_n") {
                Some(m) => self.fraction_of(m.as_str())?,
                None => 0.0,
            };
            return Ok(ValueUnit::new(count + fraction, unit.unit));
        }
        if let Some(post) = caps.name("post") {
            let base = self.unit_of(caps.name("unit_f").map_or("", |m| m.as_str()))?;
            return Ok(ValueUnit::new(base.value + self.fraction_of(post.as_str())?, base.unit));
        }
        if let Some(pre) = caps.name("pre") {
            let base = self.unit_of(caps.name("unit_p").map_or("", |m| m.as_str()))?;
            return Ok(ValueUnit::new(base.value * self.fraction_of(pre.as_str())?, base.unit));
        }
        self.unit_of(caps.name("unit_b").map_or("", |m| m.as_str()))
    }

    /// The count and unit a unit word stands for: 2 for duals, else 1.
    pub fn unit_of(&self, text: &str) -> Result<ValueUnit<U>> {
        self.words
            .lookup_value(text)?
            .as_ref()
            .and_then(U::from_value)
            .ok_or_else(|| Error::UnknownRule(format!("unit word '{text}'")))
    }

    fn fraction_of(&self, text: &str) -> Result<f64> {
        self.fractions
            .value(text)?
            .ok_or_else(|| Error::UnknownRule(format!("fraction word '{text}'")))
    }

    pub fn singular(&self) -> &RuleCollection {
        &self.singular
    }
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
