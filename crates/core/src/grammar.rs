// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The assembled grammar and the dimension parsing entry points.
//!
//! [`Grammar::new`] runs the whole registration pass once: fractions,
//! numerals, ordinals, durations, distances, times and names, followed by one
//! top-level rule per dimension. Every dimension expression is compiled
//! eagerly, so a built grammar is immutable and can be shared across threads.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::OnceCell;

use crate::dimension::{Dimension, DimensionType};
use crate::distance::Distances;
use crate::duration::Durations;
use crate::error::{Error, Result};
use crate::group::ExpressionGroup;
use crate::names;
use crate::numeral::Numerals;
use crate::ordinal::Ordinals;
use crate::patterns::Fractions;
use crate::rule::RuleSet;
use crate::time::Times;

static GLOBAL: OnceCell<Grammar> = OnceCell::new();

/// Every rule plus one expression group per implemented dimension.
#[derive(Debug)]
pub struct Grammar {
    rules: RuleSet,
    dimensions: HashMap<DimensionType, ExpressionGroup>,
}

impl Grammar {
    /// Registers and compiles every grammar.
    pub fn new() -> Result<Self> {
        let started = Instant::now();
        let mut rules = RuleSet::new();

        let fractions = Fractions::register(&mut rules)?;
        let numerals = Numerals::register(&mut rules)?;
        let ordinals = Ordinals::register(&mut rules)?;
        let durations = Durations::register(&mut rules, Arc::clone(&numerals), fractions.clone())?;
        let distances = Distances::register(&mut rules, Arc::clone(&numerals), fractions.clone())?;
        let times = Times::register(&mut rules, Arc::clone(&numerals), fractions, &durations)?;

        let numeral = rules.add("numeral", numerals.expression())?;
        let ordinal = rules.add("ordinal", ordinals.expression())?;
        let duration = rules.add("duration", durations.expression()?)?;
        let distance = rules.add("distance", distances.expression()?)?;
        let time = rules.add("time", times.expression()?)?;
        let interval = rules.add("time_interval", times.interval(&time))?;
        let until = rules.add("time_until", times.until(&time))?;
        let names = rules.add("names", names::expression())?;

        let dimensions = HashMap::from([
            (DimensionType::Numeral, ExpressionGroup::new([numeral])),
            (DimensionType::Ordinal, ExpressionGroup::new([ordinal])),
            (DimensionType::Duration, ExpressionGroup::new([duration])),
            (DimensionType::Distance, ExpressionGroup::new([distance])),
            (
                DimensionType::Time,
                ExpressionGroup::new([interval, until, time]).smart(),
            ),
            (DimensionType::Names, ExpressionGroup::new([names])),
        ]);
        for group in dimensions.values() {
            for expression in group.iter() {
                expression.compile()?;
            }
        }

        tracing::debug!(
            "built grammar: {} rules in {}ms",
            rules.len(),
            started.elapsed().as_millis()
        );
        Ok(Grammar { rules, dimensions })
    }

    /// The process-wide grammar, built on first use.
    pub fn global() -> Result<&'static Grammar> {
        GLOBAL.get_or_try_init(Grammar::new)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The expression group backing a dimension.
    pub fn group(&self, dimension: DimensionType) -> Result<&ExpressionGroup> {
        self.dimensions
            .get(&dimension)
            .ok_or(Error::NotImplemented(dimension))
    }

    /// Finds every requested dimension in `text`.
    ///
    /// Results are grouped per dimension in request order. When a single
    /// dimension is requested they are ordered by start offset.
    pub fn parse_dimension(&self, text: &str, dimensions: &[DimensionType]) -> Result<Vec<Dimension<'_>>> {
        if dimensions.is_empty() {
            return Err(Error::NoDimensionRequested);
        }
        if let Some(missing) = dimensions.iter().find(|d| !d.is_implemented()) {
            return Err(Error::NotImplemented(*missing));
        }

        let mut requested: Vec<DimensionType> = Vec::with_capacity(dimensions.len());
        for dimension in dimensions {
            if !requested.contains(dimension) {
                requested.push(*dimension);
            }
        }

        let mut found = Vec::new();
        for &dimension in &requested {
            let results = self.group(dimension)?.parse(text)?;
            tracing::trace!("{}: {} matches", dimension, results.len());
            found.extend(
                results
                    .into_iter()
                    .map(|result| Dimension::from_result(result, text, dimension)),
            );
        }
        if requested.len() == 1 {
            found.sort_by_key(|d| d.start);
        }
        Ok(found)
    }

    /// Finds every implemented dimension in `text`.
    pub fn parse(&self, text: &str) -> Result<Vec<Dimension<'_>>> {
        self.parse_dimension(text, &DimensionType::implemented())
    }
}

/// [`Grammar::parse_dimension`] on the global grammar.
pub fn parse_dimension(text: &str, dimensions: &[DimensionType]) -> Result<Vec<Dimension<'static>>> {
    Grammar::global()?.parse_dimension(text, dimensions)
}

/// [`Grammar::parse`] on the global grammar.
pub fn parse(text: &str) -> Result<Vec<Dimension<'static>>> {
    Grammar::global()?.parse(text)
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
