// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Values produced by expressions.

use std::fmt;

use serde::Serialize;

use crate::time::{TimeInterval, TimeValue};
use crate::units::{DistanceUnit, DistanceValue, DurationUnit, DurationValue, ValueUnit};

/// The value extracted from a single match.
///
/// Leaf rules carry constants (a numeral token, a unit, a weekday number);
/// dimension grammars reduce their matches to the structured variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Every capture group of a match, in declaration order.
    Groups(Vec<Option<String>>),
    Token(NumeralToken),
    DurationUnit(ValueUnit<DurationUnit>),
    DistanceUnit(ValueUnit<DistanceUnit>),
    Duration(DurationValue),
    Distance(DistanceValue),
    Time(TimeValue),
    Interval(TimeInterval),
}

impl Value {
    /// Integral numbers become [`Value::Integer`], everything else [`Value::Float`].
    pub fn from_number(n: f64) -> Self {
        if n.fract() == 0.0 && n.abs() < 9.0e15 {
            Value::Integer(n as i64)
        } else {
            Value::Float(n)
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Token(NumeralToken::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&TimeValue> {
        match self {
            Value::Time(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{}", format_number(*n)),
            Value::Text(s) => write!(f, "{s}"),
            Value::Groups(groups) => {
                let parts: Vec<&str> = groups.iter().map(|g| g.as_deref().unwrap_or("")).collect();
                write!(f, "{}", parts.join("|"))
            }
            Value::Token(token) => write!(f, "{token:?}"),
            Value::DurationUnit(vu) => write!(f, "{vu}"),
            Value::DistanceUnit(vu) => write!(f, "{vu}"),
            Value::Duration(d) => write!(f, "{d}"),
            Value::Distance(d) => write!(f, "{d}"),
            Value::Time(t) => write!(f, "{t}"),
            Value::Interval(i) => write!(f, "{i}"),
        }
    }
}

/// One lexical piece of a spelled-out number.
///
/// Numeral words are agglutinative: "three hundred and twenty-five thousand"
/// is a stream of numbers closed off by multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralToken {
    Number(f64),
    /// A magnitude word; `count` applies when no number precedes it
    /// (the dual "ألفين" is two thousand on its own).
    Multiplier { base: f64, count: f64 },
    DecimalPoint,
}

/// Renders a float without a trailing `.0` for integral values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
