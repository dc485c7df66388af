// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dimension types and the located values the parser emits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::expression::{Expression, ExpressionResult};
use crate::value::Value;

/// The kinds of value the parser knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionType {
    AmountOfMoney,
    Duration,
    Distance,
    Numeral,
    Ordinal,
    Quantity,
    Temperature,
    Time,
    Volume,
    Names,
}

impl DimensionType {
    /// Every dimension type, in declaration order.
    pub const ALL: [DimensionType; 10] = [
        DimensionType::AmountOfMoney,
        DimensionType::Duration,
        DimensionType::Distance,
        DimensionType::Numeral,
        DimensionType::Ordinal,
        DimensionType::Quantity,
        DimensionType::Temperature,
        DimensionType::Time,
        DimensionType::Volume,
        DimensionType::Names,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionType::AmountOfMoney => "amount_of_money",
            DimensionType::Duration => "duration",
            DimensionType::Distance => "distance",
            DimensionType::Numeral => "numeral",
            DimensionType::Ordinal => "ordinal",
            DimensionType::Quantity => "quantity",
            DimensionType::Temperature => "temperature",
            DimensionType::Time => "time",
            DimensionType::Volume => "volume",
            DimensionType::Names => "names",
        }
    }

    /// Whether a grammar backs this dimension.
    pub fn is_implemented(&self) -> bool {
        !matches!(
            self,
            DimensionType::AmountOfMoney
                | DimensionType::Quantity
                | DimensionType::Temperature
                | DimensionType::Volume
        )
    }

    /// The dimensions that have a grammar.
    pub fn implemented() -> Vec<DimensionType> {
        Self::ALL.into_iter().filter(|d| d.is_implemented()).collect()
    }

    /// Comma separated list of names, for error hints.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DimensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DimensionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == name)
            .ok_or_else(|| Error::UnknownDimension(s.to_string()))
    }
}

/// A value found in a text, with its location.
///
/// Offsets are byte offsets into the parsed text.
#[derive(Debug, Clone, Serialize)]
pub struct Dimension<'g> {
    #[serde(skip)]
    pub expression: &'g Expression,
    pub body: String,
    pub value: Value,
    pub start: usize,
    pub end: usize,
    pub dimension_type: DimensionType,
}

impl<'g> Dimension<'g> {
    /// Wraps a match of `text` as a dimension of the given type.
    pub fn from_result(result: ExpressionResult<'g>, text: &str, dimension_type: DimensionType) -> Self {
        Dimension {
            body: result.body(text).to_string(),
            expression: result.expression,
            value: result.value,
            start: result.start,
            end: result.end,
            dimension_type,
        }
    }
}

impl fmt::Display for Dimension<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}..{}\t{}\t{}",
            self.dimension_type, self.start, self.end, self.body, self.value
        )
    }
}

#[cfg(test)]
#[path = "dimension_tests.rs"]
mod tests;
