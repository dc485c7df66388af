// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  abaad parse \"بعد شهرين\"                 Find every dimension
  abaad parse -d duration \"ساعتين ونص\"     Find durations only
  abaad clean --remove harakat \"مَرْحَبًا\"   Strip diacritics
  abaad rules time_                        List the time rules";

#[derive(Parser)]
#[command(name = "abaad")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract durations, dates, numbers and names from Arabic text")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Configuration file (default: ./abaad.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find dimensions in text
    #[command(after_help = "Examples:\n  \
        abaad parse \"بعد شهرين\" --anchor 2021-09-01    Resolve times against a date\n  \
        abaad parse -d numeral,ordinal \"الثالث من عشرين\"  Several dimensions\n  \
        echo \"3 ساعات\" | abaad parse -o json            Read stdin, print JSON")]
    Parse {
        /// Text to parse (read from stdin when omitted)
        text: Option<String>,

        /// Dimension(s) to look for (comma-separated or repeated)
        #[arg(long = "dimension", short = 'd', value_delimiter = ',')]
        dimensions: Vec<String>,

        /// Date and time that relative times resolve against (default: now)
        #[arg(long, value_name = "YYYY-MM-DD[THH:MM[:SS]]")]
        anchor: Option<String>,

        /// Output format
        #[arg(long, short, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Clean and normalize text
    #[command(after_help = "Examples:\n  \
        abaad clean --remove hashtags,links \"نص #وسم\"   Drop hashtags and links\n  \
        abaad clean --keep arabic \"Hello مرحبا\"         Keep Arabic only\n  \
        abaad clean --normalize alef,taa_marbuta \"أسامة\"  Fold letter variants")]
    Clean {
        /// Text to clean (read from stdin when omitted)
        text: Option<String>,

        /// Character classes to remove (comma-separated or repeated)
        #[arg(long, value_delimiter = ',')]
        remove: Vec<String>,

        /// Character classes to keep, dropping everything else
        #[arg(long, value_delimiter = ',')]
        keep: Vec<String>,

        /// Letter normalizations to apply
        #[arg(long, value_delimiter = ',')]
        normalize: Vec<String>,
    },

    /// List grammar rules in registration order
    Rules {
        /// Only rules whose name starts with this prefix
        prefix: Option<String>,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
