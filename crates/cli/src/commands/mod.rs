// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod clean;
pub mod parse;
pub mod rules;

use std::io::Read;

use crate::error::{Error, Result};

/// The text argument, or all of stdin when it is absent or `-`.
pub fn read_input(text: Option<String>) -> Result<String> {
    let text = match text {
        Some(text) if text != "-" => text,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    if text.trim().is_empty() {
        return Err(Error::NoInput);
    }
    Ok(text)
}
