// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! abaad-core: Arabic dimension parsing
//!
//! This crate provides the expression and rule framework, the numeral,
//! ordinal, duration, distance, time and name grammars built on it, the
//! dimension façade, and the text cleaners used by the abaad CLI.

pub mod clean;
pub mod dimension;
pub mod distance;
pub mod duration;
pub mod error;
pub mod expression;
pub mod grammar;
pub mod group;
pub mod names;
pub mod numeral;
pub mod ordinal;
pub mod patterns;
pub mod rule;
pub mod time;
pub mod units;
pub mod value;

pub use clean::{CharClass, Normalization, Operator};
pub use dimension::{Dimension, DimensionType};
pub use error::{Error, Result};
pub use expression::{Expression, ExpressionResult};
pub use grammar::{parse, parse_dimension, Grammar};
pub use group::ExpressionGroup;
pub use rule::{Rule, RuleCollection, RuleSet};
pub use time::{HijriDate, Meridiem, TimeInterval, TimeOptions, TimeValue};
pub use units::{DistanceUnit, DistanceValue, DurationUnit, DurationValue, Measure, ValueUnit};
pub use value::Value;
