// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named rules and grammar composition.
//!
//! A [`RuleSet`] is filled once while a grammar is built and is read-only
//! afterwards. Registration order is significant: [`RuleSet::slice`] groups
//! contiguous rules, so "zero".."nine" covers exactly the ten ones words.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use regex::Regex;

use crate::error::{Error, Result};
use crate::expression::{build_regex, Expression};
use crate::group::ExpressionGroup;
use crate::value::Value;

/// A named expression.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    expression: Arc<Expression>,
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expression(&self) -> &Arc<Expression> {
        &self.expression
    }
}

/// Registry of uniquely named rules, in registration order.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `expression` under `name`. Names are unique.
    pub fn add(&mut self, name: impl Into<String>, expression: Expression) -> Result<Arc<Expression>> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateRule(name));
        }
        let expression = Arc::new(expression);
        self.index.insert(name.clone(), self.rules.len());
        self.rules.push(Rule {
            name,
            expression: Arc::clone(&expression),
        });
        Ok(expression)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&i| &self.rules[i])
    }

    pub fn expression(&self, name: &str) -> Result<Arc<Expression>> {
        self.get(name)
            .map(|rule| Arc::clone(&rule.expression))
            .ok_or_else(|| Error::UnknownRule(name.to_string()))
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownRule(name.to_string()))
    }

    /// Rules from `start` to `end` inclusive, in registration order.
    pub fn slice(&self, start: &str, end: &str) -> Result<RuleCollection> {
        let from = self.position(start)?;
        let to = self.position(end)?;
        if from > to {
            return Err(Error::InvalidRuleRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(self.slice_index(from..to + 1))
    }

    /// Rules by registration index; out-of-range indices are clamped.
    pub fn slice_index(&self, range: Range<usize>) -> RuleCollection {
        let end = range.end.min(self.rules.len());
        let start = range.start.min(end);
        RuleCollection {
            rules: self.rules[start..end].to_vec(),
        }
    }

    /// The named rules, in the order given.
    pub fn collect(&self, names: &[&str]) -> Result<RuleCollection> {
        let rules = names
            .iter()
            .map(|name| {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| Error::UnknownRule(name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleCollection { rules })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// An ordered view over some rules of a [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct RuleCollection {
    rules: Vec<Rule>,
}

impl RuleCollection {
    /// Alternation of the members' patterns, named groups stripped.
    pub fn join(&self) -> String {
        let parts: Vec<String> = self.rules.iter().map(|r| r.expression.bare_pattern()).collect();
        format!("(?:{})", parts.join("|"))
    }

    pub fn expression_group(&self, smart: bool) -> ExpressionGroup {
        let group = ExpressionGroup::new(self.rules.iter().map(|r| Arc::clone(&r.expression)));
        if smart {
            group.smart()
        } else {
            group
        }
    }

    /// The first rule whose expression matches all of `text`.
    pub fn lookup(&self, text: &str) -> Result<Option<&Rule>> {
        for rule in &self.rules {
            if rule.expression.full_match(text)?.is_some() {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }

    /// The value of the first rule matching all of `text`.
    pub fn lookup_value(&self, text: &str) -> Result<Option<Value>> {
        for rule in &self.rules {
            if let Some(result) = rule.expression.full_match(text)? {
                return Ok(Some(result.value));
            }
        }
        Ok(None)
    }

    /// Scanner that splits text into the members' words, earlier members
    /// taking precedence at the same position.
    pub fn tokenizer(&self) -> Result<Tokenizer> {
        let names: Vec<String> = (0..self.rules.len()).map(|i| format!("r{i}")).collect();
        let alternatives: Vec<String> = self
            .rules
            .iter()
            .zip(&names)
            .map(|(rule, name)| format!("(?P<{name}>{})", rule.expression.bare_pattern()))
            .collect();
        Ok(Tokenizer {
            regex: build_regex(&alternatives.join("|"))?,
            names,
            rules: self.rules.clone(),
        })
    }

    /// See [`combine_patterns`].
    pub fn combine<F>(&self, separator: &str, fold: F) -> Result<Expression>
    where
        F: Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        let members: Vec<Arc<Expression>> = self.rules.iter().map(|r| Arc::clone(&r.expression)).collect();
        combine_patterns(&members, separator, fold)
    }

    pub fn extend(&mut self, other: &RuleCollection) {
        self.rules.extend(other.rules.iter().cloned());
    }

    /// `self` followed by `other`.
    pub fn chain(mut self, other: &RuleCollection) -> Self {
        self.extend(other);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A word recognised by a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
    pub rule: &'a str,
    pub value: Value,
}

/// Ordered scanner built from a [`RuleCollection`].
#[derive(Debug)]
pub struct Tokenizer {
    regex: Regex,
    names: Vec<String>,
    rules: Vec<Rule>,
}

impl Tokenizer {
    /// Every recognised word in `text`; unrecognised text is skipped.
    pub fn tokens<'a>(&'a self, text: &'a str) -> Result<Vec<Token<'a>>> {
        let mut tokens = Vec::new();
        for caps in self.regex.captures_iter(text) {
            let Some(index) = self.names.iter().position(|n| caps.name(n).is_some()) else {
                continue;
            };
            let Some(m) = caps.get(0) else {
                continue;
            };
            let rule = &self.rules[index];
            let value = match rule.expression.constant() {
                Some(v) => Some(v.clone()),
                None => rule.expression.full_match(m.as_str())?.map(|r| r.value),
            };
            if let Some(value) = value {
                tokens.push(Token {
                    text: m.as_str(),
                    span: m.range(),
                    rule: &rule.name,
                    value,
                });
            }
        }
        Ok(tokens)
    }
}

/// Builds a grammar for one or more segments joined by `separator`.
///
/// The expression matches a first member followed by any number of
/// separator-prefixed members. Its value is `fold` applied to the members'
/// own values in textual order: each segment is found again in the matched
/// span and evaluated with the member that produced it.
pub fn combine_patterns<F>(members: &[Arc<Expression>], separator: &str, fold: F) -> Result<Expression>
where
    F: Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static,
{
    let names: Vec<String> = (0..members.len()).map(|i| format!("t{i}")).collect();
    let tagged: Vec<String> = members
        .iter()
        .zip(&names)
        .map(|(m, name)| format!("(?P<{name}>{})", m.bare_pattern()))
        .collect();
    let segment = build_regex(&tagged.join("|"))?;
    let bare: Vec<String> = members.iter().map(|m| m.bare_pattern()).collect();
    let alternatives = bare.join("|");
    let pattern = format!(r"\b(?:{alternatives})(?:{separator}(?:{alternatives}))*");
    let members = members.to_vec();

    Ok(Expression::reduce(pattern, move |caps, haystack| {
        let Some(whole) = caps.get(0) else {
            return fold(Vec::new());
        };
        let mut values = Vec::new();
        let mut pos = whole.start();
        while pos < whole.end() {
            let Some(seg) = segment.captures_at(haystack, pos) else {
                break;
            };
            let Some(m) = seg.get(0) else {
                break;
            };
            if m.start() >= whole.end() || m.is_empty() {
                break;
            }
            if let Some(i) = names.iter().position(|n| seg.name(n).is_some()) {
                if let Some(result) = members[i].evaluate_at(haystack, m.start())? {
                    values.push(result.value);
                }
            }
            pos = m.end();
        }
        fold(values)
    }))
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
