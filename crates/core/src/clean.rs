// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character-class cleaning and letter normalization.
//!
//! Each [`CharClass`] maps to a character table or a pattern. The functions
//! here combine the requested classes into one regex per call.

use std::fmt;
use std::str::FromStr;

use regex::{NoExpand, Regex};

use crate::error::{Error, Result};
use crate::expression::build_regex;

/// Text a cleaning function can keep, remove, find or replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    ArabicLetters,
    EnglishLetters,
    ArabicNumbers,
    EnglishNumbers,
    Harakat,
    Tatweel,
    ArabicPunctuations,
    EnglishPunctuations,
    /// Arabic letters, numbers, harakat, tatweel and punctuation.
    Arabic,
    /// English letters, numbers and punctuation.
    English,
    Emojis,
    Hashtags,
    Mentions,
    Links,
    Emails,
    ArabicLigatures,
}

enum Part {
    /// The body of a bracketed character class.
    Chars(&'static str),
    Pattern(&'static str),
}

const ARABIC_LETTERS: &str = r"\x{0621}-\x{063A}\x{0641}-\x{064A}\x{0671}-\x{06D3}";
const ENGLISH_LETTERS: &str = "A-Za-z";
const ARABIC_NUMBERS: &str = "٠-٩";
const ENGLISH_NUMBERS: &str = "0-9";
const HARAKAT: &str = r"\x{064B}-\x{0652}\x{0670}";
const TATWEEL: &str = r"\x{0640}";
const ARABIC_PUNCTUATIONS: &str = "،؛؟٪٫٬«»";
const ENGLISH_PUNCTUATIONS: &str = r"!-/:-@\[-\x60\{-~";
const EMOJIS: &str = r"\x{1F000}-\x{1FAFF}\x{2600}-\x{27BF}\x{FE0F}\x{200D}";
const LIGATURES: &str = r"\x{FDF0}-\x{FDFD}\x{FEF5}-\x{FEFC}";

const LINK: &str = r"(?:https?://|www\.)\S+";
const EMAIL: &str = r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+";
const HASHTAG: &str = r"#\w+";
const MENTION: &str = r"@\w+";

impl CharClass {
    pub const ALL: [CharClass; 16] = [
        CharClass::ArabicLetters,
        CharClass::EnglishLetters,
        CharClass::ArabicNumbers,
        CharClass::EnglishNumbers,
        CharClass::Harakat,
        CharClass::Tatweel,
        CharClass::ArabicPunctuations,
        CharClass::EnglishPunctuations,
        CharClass::Arabic,
        CharClass::English,
        CharClass::Emojis,
        CharClass::Hashtags,
        CharClass::Mentions,
        CharClass::Links,
        CharClass::Emails,
        CharClass::ArabicLigatures,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::ArabicLetters => "arabic_letters",
            CharClass::EnglishLetters => "english_letters",
            CharClass::ArabicNumbers => "arabic_numbers",
            CharClass::EnglishNumbers => "english_numbers",
            CharClass::Harakat => "harakat",
            CharClass::Tatweel => "tatweel",
            CharClass::ArabicPunctuations => "arabic_punctuations",
            CharClass::EnglishPunctuations => "english_punctuations",
            CharClass::Arabic => "arabic",
            CharClass::English => "english",
            CharClass::Emojis => "emojis",
            CharClass::Hashtags => "hashtags",
            CharClass::Mentions => "mentions",
            CharClass::Links => "links",
            CharClass::Emails => "emails",
            CharClass::ArabicLigatures => "arabic_ligatures",
        }
    }

    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn parts(&self) -> Vec<Part> {
        match self {
            CharClass::ArabicLetters => vec![Part::Chars(ARABIC_LETTERS)],
            CharClass::EnglishLetters => vec![Part::Chars(ENGLISH_LETTERS)],
            CharClass::ArabicNumbers => vec![Part::Chars(ARABIC_NUMBERS)],
            CharClass::EnglishNumbers => vec![Part::Chars(ENGLISH_NUMBERS)],
            CharClass::Harakat => vec![Part::Chars(HARAKAT)],
            CharClass::Tatweel => vec![Part::Chars(TATWEEL)],
            CharClass::ArabicPunctuations => vec![Part::Chars(ARABIC_PUNCTUATIONS)],
            CharClass::EnglishPunctuations => vec![Part::Chars(ENGLISH_PUNCTUATIONS)],
            CharClass::Arabic => vec![
                Part::Chars(ARABIC_LETTERS),
                Part::Chars(ARABIC_NUMBERS),
                Part::Chars(HARAKAT),
                Part::Chars(TATWEEL),
                Part::Chars(ARABIC_PUNCTUATIONS),
            ],
            CharClass::English => vec![
                Part::Chars(ENGLISH_LETTERS),
                Part::Chars(ENGLISH_NUMBERS),
                Part::Chars(ENGLISH_PUNCTUATIONS),
            ],
            CharClass::Emojis => vec![Part::Chars(EMOJIS)],
            CharClass::Hashtags => vec![Part::Pattern(HASHTAG)],
            CharClass::Mentions => vec![Part::Pattern(MENTION)],
            CharClass::Links => vec![Part::Pattern(LINK)],
            CharClass::Emails => vec![Part::Pattern(EMAIL)],
            CharClass::ArabicLigatures => vec![Part::Chars(LIGATURES)],
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| Error::UnknownCharClass(s.to_string()))
    }
}

/// How [`contains`] combines several classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    And,
    #[default]
    Or,
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}

/// Letter variants [`normalize`] can fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// أ إ آ ٱ to ا.
    Alef,
    /// ة to ه.
    TaaMarbuta,
    /// ى to ي.
    AlefMaksura,
    /// Presentation-form ligatures spelled out.
    Ligatures,
    /// Runs of spaces squeezed to one.
    Spaces,
}

const LIGATURE_SPELLINGS: [(&str, &str); 8] = [
    ("\u{FDF2}", "الله"),
    ("\u{FDFA}", "صلى الله عليه وسلم"),
    ("\u{FDFB}", "جل جلاله"),
    ("\u{FDFD}", "بسم الله الرحمن الرحيم"),
    ("\u{FEF5}", "لآ"),
    ("\u{FEF7}", "لأ"),
    ("\u{FEF9}", "لإ"),
    ("\u{FEFB}", "لا"),
];

impl Normalization {
    pub const ALL: [Normalization; 5] = [
        Normalization::Alef,
        Normalization::TaaMarbuta,
        Normalization::AlefMaksura,
        Normalization::Ligatures,
        Normalization::Spaces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Normalization::Alef => "alef",
            Normalization::TaaMarbuta => "taa_marbuta",
            Normalization::AlefMaksura => "alef_maksura",
            Normalization::Ligatures => "ligatures",
            Normalization::Spaces => "spaces",
        }
    }

    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|n| n.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn apply(&self, text: &str) -> String {
        match self {
            Normalization::Alef => text.replace(['أ', 'إ', 'آ', 'ٱ'], "ا"),
            Normalization::TaaMarbuta => text.replace('ة', "ه"),
            Normalization::AlefMaksura => text.replace('ى', "ي"),
            Normalization::Ligatures => LIGATURE_SPELLINGS
                .iter()
                .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to)),
            Normalization::Spaces => squeeze(text),
        }
    }
}

impl FromStr for Normalization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == name)
            .ok_or_else(|| Error::UnknownNormalization(s.to_string()))
    }
}

fn class_regex(classes: &[CharClass]) -> Result<Regex> {
    if classes.is_empty() {
        return Err(Error::NoCleaningOption);
    }
    let mut chars = String::new();
    let mut alternatives: Vec<String> = Vec::new();
    for class in classes {
        for part in class.parts() {
            match part {
                Part::Chars(body) => chars.push_str(body),
                Part::Pattern(pattern) => alternatives.push(pattern.to_string()),
            }
        }
    }
    if !chars.is_empty() {
        alternatives.push(format!("[{chars}]+"));
    }
    build_regex(&alternatives.join("|"))
}

/// Squeezes horizontal whitespace, trims around line breaks and at both ends.
fn squeeze(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in text.split('\n') {
        lines.push(line.split_whitespace().collect::<Vec<_>>().join(" "));
    }
    lines.join("\n").trim().to_string()
}

/// Deletes every match of `classes`.
pub fn remove(text: &str, classes: &[CharClass]) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let regex = class_regex(classes)?;
    Ok(squeeze(&regex.replace_all(text, "")))
}

/// Keeps only the matches of `classes`, separated by the whitespace
/// that stood between them.
pub fn keep(text: &str, classes: &[CharClass]) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let regex = class_regex(classes)?;
    let mut kept = String::with_capacity(text.len());
    let mut last = 0;
    for m in regex.find_iter(text) {
        push_gap(&mut kept, &text[last..m.start()]);
        kept.push_str(m.as_str());
        last = m.end();
    }
    push_gap(&mut kept, &text[last..]);
    Ok(squeeze(&kept))
}

fn push_gap(out: &mut String, gap: &str) {
    if gap.contains('\n') {
        out.push('\n');
    } else if !gap.is_empty() {
        out.push(' ');
    }
}

/// Whether `text` has a match of any (`Or`) or every (`And`) class.
pub fn contains(text: &str, classes: &[CharClass], operator: Operator) -> Result<bool> {
    if text.is_empty() {
        return Ok(false);
    }
    if classes.is_empty() {
        return Err(Error::NoCleaningOption);
    }
    match operator {
        Operator::Or => Ok(class_regex(classes)?.is_match(text)),
        Operator::And => {
            for class in classes {
                if !class_regex(&[*class])?.is_match(text) {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}

/// Replaces every match of `classes` with `with`, taken literally.
pub fn replace(text: &str, classes: &[CharClass], with: &str) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let regex = class_regex(classes)?;
    Ok(regex.replace_all(text, NoExpand(with)).into_owned())
}

/// Applies each normalization in order.
pub fn normalize(text: &str, normalizations: &[Normalization]) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    if normalizations.is_empty() {
        return Err(Error::NoCleaningOption);
    }
    Ok(normalizations
        .iter()
        .fold(text.to_string(), |acc, n| n.apply(&acc)))
}

#[cfg(test)]
#[path = "clean_tests.rs"]
mod tests;
