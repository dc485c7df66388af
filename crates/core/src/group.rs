// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prioritized collections of expressions.

use std::ops::Range;
use std::sync::Arc;

use crate::error::Result;
use crate::expression::{Expression, ExpressionResult};

/// Ordered alternatives for one dimension. Priority is insertion order.
///
/// A smart group yields pairwise disjoint spans: a result overlapping a span
/// already claimed by an earlier result is dropped. The claimed spans live
/// only for the duration of one [`ExpressionGroup::parse`] call.
#[derive(Debug, Clone, Default)]
pub struct ExpressionGroup {
    expressions: Vec<Arc<Expression>>,
    smart: bool,
}

impl ExpressionGroup {
    pub fn new(expressions: impl IntoIterator<Item = Arc<Expression>>) -> Self {
        ExpressionGroup {
            expressions: expressions.into_iter().collect(),
            smart: false,
        }
    }

    /// Turns on overlap suppression.
    pub fn smart(mut self) -> Self {
        self.smart = true;
        self
    }

    pub fn is_smart(&self) -> bool {
        self.smart
    }

    pub fn push(&mut self, expression: Arc<Expression>) {
        self.expressions.push(expression);
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Expression>> {
        self.expressions.iter()
    }

    /// Runs every member over `text` in registration order.
    pub fn parse(&self, text: &str) -> Result<Vec<ExpressionResult<'_>>> {
        let mut claimed: Vec<Range<usize>> = Vec::new();
        let mut results = Vec::new();
        for expression in &self.expressions {
            for result in expression.parse(text)? {
                let result = result?;
                if self.smart {
                    let span = result.span();
                    if claimed.iter().any(|c| overlaps(c, &span)) {
                        continue;
                    }
                    claimed.push(span);
                }
                results.push(result);
            }
        }
        Ok(results)
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
