// ABOUTME: STARK CLI - command-line front end for the normative scoring engine
// ABOUTME: Scores user metrics from JSON and inspects or validates normative tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score one user (or an array of users) read from a file
//! stark-cli score --input user.json --pretty
//!
//! # Score from stdin against a custom table
//! cat users.json | stark-cli score --input - --norms norms.json
//!
//! # Validate a normative table
//! stark-cli norms validate --norms norms.json
//!
//! # Print the effective table
//! stark-cli norms show
//! ```

mod commands;

use clap::{Parser, Subcommand};
use stark_fitness::config::EngineConfig;
use stark_fitness::errors::AppResult;
use stark_fitness::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "stark-cli",
    version,
    about = "STARK fitness normative scoring CLI",
    long_about = "Scores fitness self-assessment metrics against age and gender norms, and inspects normative tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score user metrics read as JSON
    Score {
        /// Input file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: String,

        /// Normative table overriding `STARK_NORMATIVE_DATA_PATH`
        #[arg(long)]
        norms: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Normative table commands
    Norms {
        #[command(subcommand)]
        action: NormsCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum NormsCommand {
    /// Load and validate a table, then print a summary
    Validate {
        /// Table to validate (defaults to the configured table)
        #[arg(long)]
        norms: Option<PathBuf>,
    },

    /// Print the effective table as JSON
    Show {
        /// Table to show (defaults to the configured table)
        #[arg(long)]
        norms: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, details = ?e.details, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    let config = EngineConfig::from_env()?;

    match command {
        Command::Score {
            input,
            norms,
            pretty,
        } => commands::score::run(&config.with_normative_data_path(norms), &input, pretty),
        Command::Norms { action } => match action {
            NormsCommand::Validate { norms } => {
                commands::norms::validate(&config.with_normative_data_path(norms))
            }
            NormsCommand::Show { norms } => {
                commands::norms::show(&config.with_normative_data_path(norms))
            }
        },
    }
}
