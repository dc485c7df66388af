// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durations ("3 ساعات و10 دقايق", "يومين وربع", "نص ساعة").

use std::sync::Arc;

use crate::error::Result;
use crate::expression::Expression;
use crate::numeral::Numerals;
use crate::patterns::{Fractions, TAA};
use crate::rule::RuleSet;
use crate::units::{DurationUnit, DurationValue, UnitGrammar, UnitWords};
use crate::value::Value;

/// Duration unit words, largest unit first.
pub fn words() -> Vec<UnitWords<DurationUnit>> {
    vec![
        UnitWords::new(
            DurationUnit::Years,
            format!("سن{TAA}|عام"),
            "سنت[اي]ن|عام[اي]ن",
            "سنوات|سنين|[أا]عوام",
        ),
        UnitWords::new(DurationUnit::Months, "شهر", "شهر[اي]ن", "[أا]شهر|شهور"),
        UnitWords::new(DurationUnit::Weeks, "[أا]سبوع", "[أا]سبوع[اي]ن", "[أا]سابيع"),
        UnitWords::new(DurationUnit::Days, "يوم", "يوم[اي]ن", "[أا]يام"),
        UnitWords::new(DurationUnit::Hours, format!("ساع{TAA}"), "ساعت[اي]ن", "ساعات"),
        UnitWords::new(
            DurationUnit::Minutes,
            format!("دقيق{TAA}"),
            "دقيقت[اي]ن",
            "دقائق|دقايق",
        ),
        UnitWords::new(
            DurationUnit::Seconds,
            format!("ثاني{TAA}"),
            "ثانيت[اي]ن",
            "ثوان[يى]?",
        ),
    ]
}

/// The duration rules and grammar.
#[derive(Debug, Clone)]
pub struct Durations {
    grammar: Arc<UnitGrammar<DurationUnit>>,
    segment: Arc<Expression>,
}

impl Durations {
    /// Registers the duration unit words and the `duration_segment` rule.
    pub fn register(rules: &mut RuleSet, numerals: Arc<Numerals>, fractions: Fractions) -> Result<Self> {
        let grammar = UnitGrammar::register(rules, &words(), numerals, fractions)?;
        let segment = rules.add("duration_segment", grammar.segment())?;
        Ok(Durations { grammar, segment })
    }

    /// The duration dimension: value is a [`DurationValue`].
    pub fn expression(&self) -> Result<Expression> {
        UnitGrammar::<DurationUnit>::measure(&self.segment)
    }

    pub fn grammar(&self) -> &Arc<UnitGrammar<DurationUnit>> {
        &self.grammar
    }

    /// The duration written in `text`, which must be a whole duration phrase.
    pub fn reduce(expression: &Expression, text: &str) -> Result<Option<DurationValue>> {
        Ok(match expression.full_match(text)?.map(|r| r.value) {
            Some(Value::Duration(measure)) => Some(measure),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
