// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordinal numbers ("الأول", "الحادي عشر", "الخامس والعشرون").

use std::sync::Arc;

use crate::error::Result;
use crate::expression::Expression;
use crate::patterns::{alternation, word, TAA};
use crate::rule::{RuleCollection, RuleSet, Tokenizer};
use crate::value::{NumeralToken, Value};

/// Optional definite article.
const DEFINITE: &str = "(?:ال)?";

/// The ordinal rules plus the grammar and reducer built on them.
#[derive(Debug)]
pub struct Ordinals {
    ordered: RuleCollection,
    tokenizer: Tokenizer,
    pattern: String,
}

impl Ordinals {
    /// Registers the ordinal rules. The cardinal tens must already be
    /// registered; the tens ordinals share their spelling.
    pub fn register(rules: &mut RuleSet) -> Result<Arc<Self>> {
        let number = |v: f64| Value::Token(NumeralToken::Number(v));

        let units = [
            ("ordinal_first", format!("[أا]ول[ىي]?|حادي{TAA}?"), 1.0),
            ("ordinal_second", format!("ثاني{TAA}?|تاني{TAA}?"), 2.0),
            ("ordinal_third", format!("ثالث{TAA}?|تالت{TAA}?"), 3.0),
            ("ordinal_fourth", format!("رابع{TAA}?"), 4.0),
            ("ordinal_fifth", format!("خامس{TAA}?"), 5.0),
            ("ordinal_sixth", format!("سادس{TAA}?"), 6.0),
            ("ordinal_seventh", format!("سابع{TAA}?"), 7.0),
            ("ordinal_eighth", format!("ثامن{TAA}?|تامن{TAA}?"), 8.0),
            ("ordinal_ninth", format!("تاسع{TAA}?"), 9.0),
            ("ordinal_tenth", format!("عاشر{TAA}?"), 10.0),
        ];
        for (name, pattern, value) in units {
            let pattern = format!("{DEFINITE}(?:{pattern})");
            rules.add(name, Expression::value(word(&pattern), number(value)))?;
        }

        let cardinal_tens = rules.slice("twenty", "ninety")?;
        let tens_names = [
            "ordinal_twentieth",
            "ordinal_thirtieth",
            "ordinal_fortieth",
            "ordinal_fiftieth",
            "ordinal_sixtieth",
            "ordinal_seventieth",
            "ordinal_eightieth",
            "ordinal_ninetieth",
        ];
        for ((name, rule), tens) in tens_names.iter().zip(cardinal_tens.iter()).zip(2..=9) {
            let pattern = format!("{DEFINITE}{}", rule.expression().bare_pattern());
            rules.add(*name, Expression::value(pattern, number(f64::from(tens) * 10.0)))?;
        }

        rules.add(
            "ordinal_hundredth",
            Expression::value(word(&format!("ال(?:م[ئي]{TAA}|مائ{TAA})")), number(100.0)),
        )?;
        rules.add(
            "ordinal_thousandth",
            Expression::value(word("ال[أا]لف"), number(1000.0)),
        )?;
        rules.add(
            "ordinal_teen",
            Expression::value(word(&format!("عشر{TAA}?")), number(10.0)),
        )?;

        let units = rules.slice("ordinal_first", "ordinal_tenth")?;
        let tens = rules.slice("ordinal_twentieth", "ordinal_ninetieth")?;
        let big = rules.slice("ordinal_hundredth", "ordinal_thousandth")?;
        let teen = rules.slice("ordinal_teen", "ordinal_teen")?;

        let unit = units.join();
        let compound = format!(r"{unit}\s*و\s*{}", tens.join());
        let teen_form = format!(r"{unit}\s+{}", teen.join());
        let definite_tens = format!("ال{}", cardinal_tens.join());
        // Alone, an indefinite unit form is usually another word ("ثانية" is a
        // second of time), so only the definite form and "أول" count.
        let standalone = format!("ال{unit}|{}", word("[أا]ول[ىي]?"));
        let pattern = alternation([compound, teen_form, standalone, definite_tens, big.join()]);

        let ordered = tens.chain(&units).chain(&big).chain(&teen);
        Ok(Arc::new(Ordinals {
            tokenizer: ordered.tokenizer()?,
            ordered,
            pattern,
        }))
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn ordered(&self) -> &RuleCollection {
        &self.ordered
    }

    /// The ordinal dimension: value is the integer position.
    pub fn expression(self: &Arc<Self>) -> Expression {
        let ordinals = Arc::clone(self);
        Expression::reduce(format!(r"\b{}", self.pattern), move |caps, _| {
            let text = caps.get(0).map_or("", |m| m.as_str());
            Ok(Value::from_number(ordinals.reduce(text)?))
        })
    }

    /// Sums the ordinal words; the teen suffix counts as ten.
    pub fn reduce(&self, text: &str) -> Result<f64> {
        Ok(self
            .tokenizer
            .tokens(text)?
            .iter()
            .filter_map(|t| t.value.as_f64())
            .sum())
    }
}

#[cfg(test)]
#[path = "ordinal_tests.rs"]
mod tests;
