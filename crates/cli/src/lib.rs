// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! abaadrs - command-line front end for the abaad Arabic dimension parser.
//!
//! # Main Components
//!
//! - [`Cli`] - Command-line definition
//! - [`Config`] - User configuration (default dimensions, output, week start, log level)
//! - [`Error`] - Error types for all operations
//!
//! Parsing itself lives in [`abaad_core`].

mod cli;
mod commands;

pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Loads configuration, installs logging and runs one command.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;
    logging::init(config.log_level.as_deref());

    match cli.command {
        Command::Parse {
            text,
            dimensions,
            anchor,
            output,
        } => commands::parse::run(text, dimensions, anchor, output, &config),
        Command::Clean {
            text,
            remove,
            keep,
            normalize,
        } => commands::clean::run(text, &remove, &keep, &normalize),
        Command::Rules { prefix } => commands::rules::run(prefix.as_deref()),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "abaad", &mut std::io::stdout());
            Ok(())
        }
    }
}
