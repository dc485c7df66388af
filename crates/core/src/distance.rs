// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Distances ("نصف كيلو متر", "3 كم", "ميلين").

use std::sync::Arc;

use crate::error::Result;
use crate::expression::Expression;
use crate::numeral::Numerals;
use crate::patterns::{Fractions, TAA};
use crate::rule::RuleSet;
use crate::units::{DistanceUnit, UnitGrammar, UnitWords};

pub fn words() -> Vec<UnitWords<DistanceUnit>> {
    vec![
        UnitWords::new(DistanceUnit::Meters, "متر", "متر[اي]ن", "[أا]متار|مترات").abbreviation("م").symbol("m"),
        UnitWords::new(
            DistanceUnit::Kilometers,
            "كيلو ?متر",
            "كيلو ?متر[اي]ن",
            "كيلو ?مترات",
        )
        .abbreviation("كم").symbol("km"),
        UnitWords::new(
            DistanceUnit::Centimeters,
            "سا?نتي ?متر|سانتي",
            "سا?نتي ?متر[اي]ن",
            "سا?نتي ?مترات",
        )
        .abbreviation("سم").symbol("cm"),
        UnitWords::new(
            DistanceUnit::Millimeters,
            "مي?لي ?متر",
            "مي?لي ?متر[اي]ن",
            "مي?لي ?مترات",
        )
        .abbreviation("مم|ملم").symbol("mm"),
        UnitWords::new(
            DistanceUnit::Decimeters,
            "دي?سي ?متر",
            "دي?سي ?متر[اي]ن",
            "دي?سي ?مترات",
        )
        .abbreviation("دسم").symbol("dm"),
        UnitWords::new(DistanceUnit::Feet, "قدم", "قدم[اي]ن", "[أا]قدام").symbol("ft"),
        UnitWords::new(
            DistanceUnit::Inches,
            format!("[إا]نش|بوص{TAA}"),
            "[إا]نش[اي]ن|بوصت[اي]ن",
            "[إا]نشات|بوصات",
        )
        .symbol("in"),
        UnitWords::new(DistanceUnit::Yards, "يارد[اةه]?", "يارد[اي]ن", "ياردات").symbol("yd"),
        UnitWords::new(DistanceUnit::Miles, "ميل", "ميل[اي]ن", "[أا]ميال").symbol("mi"),
    ]
}

/// The distance rules and grammar.
#[derive(Debug, Clone)]
pub struct Distances {
    grammar: Arc<UnitGrammar<DistanceUnit>>,
    segment: Arc<Expression>,
}

impl Distances {
    /// Registers the distance unit words and the `distance_segment` rule.
    pub fn register(rules: &mut RuleSet, numerals: Arc<Numerals>, fractions: Fractions) -> Result<Self> {
        let grammar = UnitGrammar::register(rules, &words(), numerals, fractions)?;
        let segment = rules.add("distance_segment", grammar.segment())?;
        Ok(Distances { grammar, segment })
    }

    /// The distance dimension: value is a [`crate::units::DistanceValue`].
    pub fn expression(&self) -> Result<Expression> {
        UnitGrammar::<DistanceUnit>::measure(&self.segment)
    }

    pub fn grammar(&self) -> &Arc<UnitGrammar<DistanceUnit>> {
        &self.grammar
    }
}

#[cfg(test)]
#[path = "distance_tests.rs"]
mod tests;
