// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern expressions and their match results.
//!
//! An [`Expression`] pairs a regex pattern with a way of turning a match into
//! a [`Value`]. Patterns are stored as text and compiled once on first use;
//! compilation is guarded by a [`OnceCell`] so concurrent first use is safe.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use regex::{CaptureMatches, Captures, Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::value::Value;

/// Computes a value from a match. Receives the captures and the full haystack.
pub type Reducer = Arc<dyn Fn(&Captures<'_>, &str) -> Result<Value> + Send + Sync>;

const SIZE_LIMIT: usize = 1 << 28;

#[derive(Clone)]
enum Extract {
    /// One group unwraps to text; several become [`Value::Groups`].
    Groups,
    /// The whole matched span.
    Text,
    Constant(Value),
    Reduce(Reducer),
}

/// A regex pattern plus value extraction.
pub struct Expression {
    pattern: String,
    extract: Extract,
    compiled: OnceCell<Regex>,
    anchored: OnceCell<Regex>,
}

/// A single match of an [`Expression`].
#[derive(Debug, Clone)]
pub struct ExpressionResult<'e> {
    pub start: usize,
    pub end: usize,
    pub value: Value,
    pub expression: &'e Expression,
}

impl ExpressionResult<'_> {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text, given the haystack the result came from.
    pub fn body<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.start..self.end).unwrap_or("")
    }
}

impl Expression {
    /// Expression using default extraction; the pattern must declare a group.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_extract(pattern.into(), Extract::Groups)
    }

    /// Expression whose value is the matched text.
    pub fn text(pattern: impl Into<String>) -> Self {
        Self::with_extract(pattern.into(), Extract::Text)
    }

    /// Expression whose value is a fixed constant.
    pub fn value(pattern: impl Into<String>, value: Value) -> Self {
        Self::with_extract(pattern.into(), Extract::Constant(value))
    }

    /// Expression whose value is computed by `reducer`.
    pub fn reduce<F>(pattern: impl Into<String>, reducer: F) -> Self
    where
        F: Fn(&Captures<'_>, &str) -> Result<Value> + Send + Sync + 'static,
    {
        Self::with_extract(pattern.into(), Extract::Reduce(Arc::new(reducer)))
    }

    fn with_extract(pattern: String, extract: Extract) -> Self {
        Expression {
            pattern,
            extract,
            compiled: OnceCell::new(),
            anchored: OnceCell::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The constant of a value expression.
    pub fn constant(&self) -> Option<&Value> {
        match &self.extract {
            Extract::Constant(v) => Some(v),
            _ => None,
        }
    }

    /// The pattern with every named group turned non-capturing, for
    /// embedding into larger patterns.
    pub fn bare_pattern(&self) -> String {
        strip_group_names(&self.pattern)
    }

    /// Compiles the pattern on first use and returns the cached regex.
    pub fn compile(&self) -> Result<&Regex> {
        self.compiled.get_or_try_init(|| {
            let regex = build_regex(&self.pattern)?;
            if matches!(self.extract, Extract::Groups) && regex.captures_len() < 2 {
                return Err(Error::MissingCaptureGroup(self.pattern.clone()));
            }
            Ok(regex)
        })
    }

    fn anchored(&self) -> Result<&Regex> {
        self.compile()?;
        self.anchored
            .get_or_try_init(|| build_regex(&format!(r"\A(?:{})\z", self.pattern)))
    }

    /// Lazily yields every non-overlapping match, left to right.
    pub fn parse<'e, 't>(&'e self, text: &'t str) -> Result<Matches<'e, 't>> {
        let regex = self.compile()?;
        Ok(Matches {
            expression: self,
            haystack: text,
            inner: regex.captures_iter(text),
        })
    }

    /// The leftmost match anywhere in `text`.
    pub fn search<'e>(&'e self, text: &str) -> Result<Option<ExpressionResult<'e>>> {
        self.parse(text)?.next().transpose()
    }

    /// A match starting at the beginning of `text`.
    pub fn matches<'e>(&'e self, text: &str) -> Result<Option<ExpressionResult<'e>>> {
        self.evaluate_at(text, 0)
    }

    /// A match spanning all of `text`.
    pub fn full_match<'e>(&'e self, text: &str) -> Result<Option<ExpressionResult<'e>>> {
        let regex = self.anchored()?;
        match regex.captures(text) {
            Some(caps) => self.result(&caps, text).map(Some),
            None => Ok(None),
        }
    }

    /// A match that begins exactly at `start`. Look-around assertions such
    /// as `\b` still see the text before `start`.
    pub fn evaluate_at<'e>(
        &'e self,
        haystack: &str,
        start: usize,
    ) -> Result<Option<ExpressionResult<'e>>> {
        if start > haystack.len() {
            return Ok(None);
        }
        let regex = self.compile()?;
        match regex.captures_at(haystack, start) {
            Some(caps) if caps.get(0).is_some_and(|m| m.start() == start) => {
                self.result(&caps, haystack).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Applies this expression's extraction to a set of captures.
    pub fn extract(&self, caps: &Captures<'_>, haystack: &str) -> Result<Value> {
        match &self.extract {
            Extract::Groups => {
                let groups: Vec<Option<String>> = caps
                    .iter()
                    .skip(1)
                    .map(|g| g.map(|m| m.as_str().to_string()))
                    .collect();
                match groups.as_slice() {
                    [] => Err(Error::MissingCaptureGroup(self.pattern.clone())),
                    [single] => Ok(Value::Text(single.clone().unwrap_or_default())),
                    _ => Ok(Value::Groups(groups)),
                }
            }
            Extract::Text => Ok(Value::Text(
                caps.get(0).map_or("", |m| m.as_str()).to_string(),
            )),
            Extract::Constant(v) => Ok(v.clone()),
            Extract::Reduce(reducer) => reducer(caps, haystack),
        }
    }

    fn result<'e>(&'e self, caps: &Captures<'_>, haystack: &str) -> Result<ExpressionResult<'e>> {
        let span = caps.get(0).map_or(0..0, |m| m.range());
        Ok(ExpressionResult {
            start: span.start,
            end: span.end,
            value: self.extract(caps, haystack)?,
            expression: self,
        })
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.extract {
            Extract::Groups => "groups",
            Extract::Text => "text",
            Extract::Constant(_) => "value",
            Extract::Reduce(_) => "reduce",
        };
        let head: String = self.pattern.chars().take(60).collect();
        f.debug_struct("Expression")
            .field("kind", &kind)
            .field("pattern", &head)
            .field("len", &self.pattern.len())
            .finish()
    }
}

/// Iterator over the matches of an [`Expression`].
pub struct Matches<'e, 't> {
    expression: &'e Expression,
    haystack: &'t str,
    inner: CaptureMatches<'e, 't>,
}

impl<'e> Iterator for Matches<'e, '_> {
    type Item = Result<ExpressionResult<'e>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let caps = self.inner.next()?;
            if caps.get(0).is_some_and(|m| m.is_empty()) {
                continue;
            }
            return Some(self.expression.result(&caps, self.haystack));
        }
    }
}

/// Compiles a pattern with the settings every grammar uses.
pub(crate) fn build_regex(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .size_limit(SIZE_LIMIT)
        .dfa_size_limit(SIZE_LIMIT)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Rewrites `(?P<name>` and `(?<name>` to `(?:`.
pub(crate) fn strip_group_names(pattern: &str) -> String {
    let bytes = pattern.as_bytes();
    let mut out = String::with_capacity(pattern.len());
    let mut last = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'(' => {
                let rest = &pattern[i..];
                let prefix = if rest.starts_with("(?P<") {
                    4
                } else if rest.starts_with("(?<") {
                    3
                } else {
                    0
                };
                if prefix > 0 {
                    if let Some(close) = rest[prefix..].find('>') {
                        out.push_str(&pattern[last..i]);
                        out.push_str("(?:");
                        i += prefix + close + 1;
                        last = i;
                        continue;
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }
    out.push_str(&pattern[last..]);
    out
}

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;
