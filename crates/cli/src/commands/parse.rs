// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use abaad_core::{Dimension, DimensionType, Grammar, TimeOptions, Value};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};

use super::read_input;

const ANCHOR_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

#[derive(Serialize)]
struct ParsedDimension<'a> {
    dimension_type: DimensionType,
    body: &'a str,
    start: usize,
    end: usize,
    value: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<serde_json::Value>,
}

pub fn run(
    text: Option<String>,
    dimensions: Vec<String>,
    anchor: Option<String>,
    output: Option<OutputFormat>,
    config: &Config,
) -> Result<()> {
    let dimensions = if dimensions.is_empty() {
        config.dimensions()
    } else {
        dimensions
            .iter()
            .map(|d| d.parse::<DimensionType>())
            .collect::<abaad_core::Result<Vec<_>>>()?
    };
    let anchor = match anchor {
        Some(anchor) => parse_anchor(&anchor)?,
        None => Local::now().naive_local(),
    };
    let options = config.time_options()?;
    let format = output.unwrap_or_else(|| config.output());
    let text = read_input(text)?;

    let grammar = Grammar::global()?;
    let found = grammar.parse_dimension(&text, &dimensions)?;
    tracing::debug!("found {} dimensions", found.len());

    let mut out = std::io::stdout().lock();
    render(&found, format, anchor, &options, &mut out)
}

/// Writes dimensions as tab-separated lines or as a JSON array.
///
/// Time values get an extra column (or `resolved` field) with the
/// date they denote relative to `anchor`. A value that does not resolve,
/// such as hour 25, reads `invalid` (or `null`) and the rest still prints.
pub(crate) fn render(
    found: &[Dimension<'_>],
    format: OutputFormat,
    anchor: NaiveDateTime,
    options: &TimeOptions,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for dimension in found {
                match resolve_text(&dimension.value, anchor, options) {
                    Some(resolved) => writeln!(out, "{dimension}\t{resolved}")?,
                    None => writeln!(out, "{dimension}")?,
                }
            }
        }
        OutputFormat::Json => {
            let parsed = found
                .iter()
                .map(|d| -> Result<ParsedDimension<'_>> {
                    Ok(ParsedDimension {
                        dimension_type: d.dimension_type,
                        body: &d.body,
                        start: d.start,
                        end: d.end,
                        value: &d.value,
                        resolved: resolve_json(&d.value, anchor, options)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_writer(&mut *out, &parsed)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` and `YYYY-MM-DDTHH:MM:SS`.
pub(crate) fn parse_anchor(input: &str) -> Result<NaiveDateTime> {
    for format in ANCHOR_FORMATS {
        if let Ok(anchor) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(anchor);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::InvalidAnchor(input.to_string()))
}

fn resolve_text(value: &Value, anchor: NaiveDateTime, options: &TimeOptions) -> Option<String> {
    let show = |t: Option<NaiveDateTime>| t.map_or_else(|| "..".to_string(), |t| t.to_string());
    let resolved = match value {
        Value::Time(time) => time.resolve(anchor, options).map(|t| t.to_string()),
        Value::Interval(interval) => interval
            .resolve(anchor, options)
            .map(|(start, end)| format!("{} .. {}", show(start), show(end))),
        _ => return None,
    };
    Some(resolved.unwrap_or_else(|e| {
        tracing::warn!("{value}: {e}");
        "invalid".to_string()
    }))
}

fn resolve_json(
    value: &Value,
    anchor: NaiveDateTime,
    options: &TimeOptions,
) -> Result<Option<serde_json::Value>> {
    let resolved = match value {
        Value::Time(time) => time.resolve(anchor, options).map(serde_json::to_value),
        Value::Interval(interval) => interval
            .resolve(anchor, options)
            .map(|(start, end)| Ok(serde_json::json!({ "start": start, "end": end }))),
        _ => return Ok(None),
    };
    match resolved {
        Ok(json) => Ok(Some(json?)),
        Err(e) => {
            tracing::warn!("{value}: {e}");
            Ok(Some(serde_json::Value::Null))
        }
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
