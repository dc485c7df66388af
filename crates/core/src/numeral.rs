// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cardinal numerals, spelled out or written with digits.
//!
//! Covers Modern Standard spellings along with the common Levantine and
//! Egyptian forms ("تلاتة", "مية", "طنعش").

use std::sync::Arc;

use crate::error::Result;
use crate::expression::Expression;
use crate::patterns::{alternation, parse_digits, word, DIGITS, TAA};
use crate::rule::{RuleCollection, RuleSet, Tokenizer};
use crate::value::{NumeralToken, Value};

const HUNDRED_WORD: &str = "م[ئي][ةه]|مائ[ةه]";

const SCALES: [&str; 4] = ["thousand", "million", "billion", "trillion"];

/// The numeral rules plus the grammar and reducer built on them.
#[derive(Debug)]
pub struct Numerals {
    ordered: RuleCollection,
    tokenizer: Tokenizer,
    pattern: String,
}

impl Numerals {
    /// Registers every numeral rule and builds the numeral grammar.
    pub fn register(rules: &mut RuleSet) -> Result<Arc<Self>> {
        let number = |v: f64| Value::Token(NumeralToken::Number(v));
        let multiplier = |base: f64, count: f64| Value::Token(NumeralToken::Multiplier { base, count });

        let ones = [
            ("zero", "صفر".to_string(), 0.0),
            ("one", format!("واحد{TAA}?|وحد{TAA}"), 1.0),
            ("two", "[اإ]ثن[اي]ن|[اإ]ثنت[اي]ن|[اإ]تن[اي]ن|تنين".to_string(), 2.0),
            ("three", format!("ثلاث{TAA}?|تلات{TAA}?"), 3.0),
            ("four", format!("[أا]ربع{TAA}?"), 4.0),
            ("five", format!("خمس{TAA}?"), 5.0),
            ("six", format!("ست{TAA}?"), 6.0),
            ("seven", format!("سبع{TAA}?"), 7.0),
            (
                "eight",
                format!("ثماني{TAA}|ثمان[يى]?|تماني{TAA}|تمان[يى]?|تمن[يت]{TAA}?"),
                8.0,
            ),
            ("nine", format!("تسع{TAA}?"), 9.0),
            ("ten", format!("عشر{TAA}?"), 10.0),
            (
                "eleven",
                format!("[أا]حد ?عشر{TAA}?|[إا]حدى ?عشر{TAA}?|[اإ]حدعش"),
                11.0,
            ),
            (
                "twelve",
                format!("[اإ]ثن[اي] ?عشر{TAA}?|[اإ]ثنت[اي] ?عشر{TAA}?|[اإ]تنعش|طنعش"),
                12.0,
            ),
            ("thirteen", format!("ثلاث{TAA}? ?عشر{TAA}?|تلت?طعش|تلتعش"), 13.0),
            ("fourteen", format!("[أا]ربع{TAA}? ?عشر{TAA}?|[أا]ربعطعش"), 14.0),
            ("fifteen", format!("خمس{TAA}? ?عشر{TAA}?|خمسطعش"), 15.0),
            ("sixteen", format!("ست{TAA}? ?عشر{TAA}?|سطعش|ستطعش"), 16.0),
            ("seventeen", format!("سبع{TAA}? ?عشر{TAA}?|سبعطعش"), 17.0),
            ("eighteen", format!("ثماني?{TAA}? ?عشر{TAA}?|تمنطعش|ثمنطعش"), 18.0),
            ("nineteen", format!("تسع{TAA}? ?عشر{TAA}?|تسعطعش"), 19.0),
            ("twenty", "عشر[يو]ن".to_string(), 20.0),
            ("thirty", "ثلاث[يو]ن|تلات[يو]ن".to_string(), 30.0),
            ("forty", "[أا]ربع[يو]ن".to_string(), 40.0),
            ("fifty", "خمس[يو]ن".to_string(), 50.0),
            ("sixty", "ست[يو]ن".to_string(), 60.0),
            ("seventy", "سبع[يو]ن".to_string(), 70.0),
            ("eighty", "ثمان[يو]ن|تمان[يو]ن".to_string(), 80.0),
            ("ninety", "تسع[يو]ن".to_string(), 90.0),
        ];
        for (name, pattern, value) in ones {
            rules.add(name, Expression::value(word(&pattern), number(value)))?;
        }

        rules.add(
            "hundred",
            Expression::value(word(HUNDRED_WORD), multiplier(100.0, 1.0)),
        )?;
        rules.add(
            "two_hundred",
            Expression::value(word("م[ئي]ت[اي]ن|مائت[اي]ن"), multiplier(100.0, 2.0)),
        )?;
        let stems = [
            ("three_hundred", "ثلاث|تلات|تلت", 300.0),
            ("four_hundred", "[أا]ربع", 400.0),
            ("five_hundred", "خمس", 500.0),
            ("six_hundred", "ست", 600.0),
            ("seven_hundred", "سبع", 700.0),
            ("eight_hundred", "ثمان|ثماني|تمان|تمن", 800.0),
            ("nine_hundred", "تسع", 900.0),
        ];
        for (name, stem, value) in stems {
            let pattern = format!("(?:{stem}) ?(?:{HUNDRED_WORD})");
            rules.add(name, Expression::value(word(&pattern), number(value)))?;
        }

        let scales = [
            ("[أا]لف", "[أا]لف[اي]ن", "[آا]لاف|[أا]لوف", 1e3),
            ("مليون", "مليون[اي]ن", "ملايين|ملاين", 1e6),
            ("مليار|بليون", "مليار[اي]ن|بليون[اي]ن", "مليارات|بلايين", 1e9),
            ("تري?ليون", "تري?ليون[اي]ن", "تري?ليونات", 1e12),
        ];
        for (name, (single, dual, plural, base)) in SCALES.iter().zip(scales) {
            rules.add(*name, Expression::value(word(single), multiplier(base, 1.0)))?;
            rules.add(
                format!("{name}_dual"),
                Expression::value(word(dual), multiplier(base, 2.0)),
            )?;
            rules.add(
                format!("{name}_plural"),
                Expression::value(word(plural), multiplier(base, 1.0)),
            )?;
        }

        rules.add(
            "decimal_point",
            Expression::value(
                word(&format!("فاصل{TAA}?")),
                Value::Token(NumeralToken::DecimalPoint),
            ),
        )?;
        rules.add(
            "digits",
            Expression::reduce(DIGITS, |caps, _| {
                let n = caps.get(0).and_then(|m| parse_digits(m.as_str())).unwrap_or(0.0);
                Ok(Value::Token(NumeralToken::Number(n)))
            }),
        )?;

        let ones = rules.slice("zero", "nine")?;
        let ten = rules.slice("ten", "ten")?;
        let teens = rules.slice("eleven", "nineteen")?;
        let tens = rules.slice("twenty", "ninety")?;
        let hundred = rules.slice("hundred", "hundred")?;
        let two_hundred = rules.slice("two_hundred", "two_hundred")?;
        let compound = rules.slice("three_hundred", "nine_hundred")?;
        let singles = rules.collect(&SCALES)?;
        let duals = rules.collect(&["thousand_dual", "million_dual", "billion_dual", "trillion_dual"])?;
        let plurals = rules.collect(&[
            "thousand_plural",
            "million_plural",
            "billion_plural",
            "trillion_plural",
        ])?;
        let decimal = rules.slice("decimal_point", "decimal_point")?;
        let digits = rules.slice("digits", "digits")?;

        let sub100 = alternation([teens.join(), tens.join(), ten.join(), ones.join()]);
        let triplet = alternation([
            compound.join(),
            two_hundred.join(),
            format!(r"(?:{}|{DIGITS})\s*{}", ones.join(), hundred.join()),
            hundred.join(),
            sub100,
            DIGITS.to_string(),
        ]);
        let scale_word = plurals.clone().chain(&singles).join();
        let part = alternation([
            format!(r"{triplet}\s*{scale_word}"),
            duals.join(),
            singles.join(),
            triplet.clone(),
        ]);
        let integer = format!(r"{part}(?:\s*و\s*{part})*");
        let pattern = format!(r"{integer}(?:\s+{}\s+{integer})?", decimal.join());

        // Most specific first: "ثلاث عشرة" is one teen, not three and ten.
        let mut ordered = teens.chain(&compound).chain(&two_hundred).chain(&hundred);
        for scale in SCALES {
            let dual = format!("{scale}_dual");
            let plural = format!("{scale}_plural");
            ordered.extend(&rules.collect(&[dual.as_str(), plural.as_str(), scale])?);
        }
        let ordered = ordered
            .chain(&tens)
            .chain(&ten)
            .chain(&ones)
            .chain(&decimal)
            .chain(&digits);

        Ok(Arc::new(Numerals {
            tokenizer: ordered.tokenizer()?,
            ordered,
            pattern,
        }))
    }

    /// The numeral grammar without a leading boundary, for embedding.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Numeral rules in reduction priority order.
    pub fn ordered(&self) -> &RuleCollection {
        &self.ordered
    }

    /// The numeral dimension: value is an integer or a float.
    pub fn expression(self: &Arc<Self>) -> Expression {
        let numerals = Arc::clone(self);
        Expression::reduce(format!(r"\b(?:{})", self.pattern), move |caps, _| {
            let text = caps.get(0).map_or("", |m| m.as_str());
            Ok(Value::from_number(numerals.reduce(text)?))
        })
    }

    /// The number a numeral phrase denotes.
    pub fn reduce(&self, text: &str) -> Result<f64> {
        let tokens: Vec<NumeralToken> = self
            .tokenizer
            .tokens(text)?
            .into_iter()
            .filter_map(|t| match t.value {
                Value::Token(token) => Some(token),
                _ => None,
            })
            .collect();
        Ok(fold_tokens(&tokens))
    }
}

/// Folds numeral tokens into a number, splitting at a decimal point.
pub fn fold_tokens(tokens: &[NumeralToken]) -> f64 {
    match tokens.iter().position(|t| *t == NumeralToken::DecimalPoint) {
        Some(i) => {
            let whole = accumulate(&tokens[..i]).trunc();
            let fraction = accumulate(&tokens[i + 1..]).trunc();
            format!("{}.{}", whole as i64, fraction as i64)
                .parse()
                .unwrap_or(whole)
        }
        None => accumulate(tokens),
    }
}

fn accumulate(tokens: &[NumeralToken]) -> f64 {
    let mut total = 0.0;
    let mut current = 0.0;
    for token in tokens {
        match *token {
            NumeralToken::Number(n) => current += n,
            NumeralToken::Multiplier { base, count } => {
                let factor = if current == 0.0 { count } else { current };
                if base == 100.0 {
                    current = factor * base;
                } else {
                    total += factor * base;
                    current = 0.0;
                }
            }
            NumeralToken::DecimalPoint => {}
        }
    }
    total + current
}

#[cfg(test)]
#[path = "numeral_tests.rs"]
mod tests;
