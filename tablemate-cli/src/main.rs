//! TableMate CLI
//!
//! Commands:
//! - `tablemate normalize [FILE]`: Print the normalized value
//! - `tablemate validate [FILE]`: List invalid cells
//! - `tablemate serialize [FILE]`: Print the storage form
//! - `tablemate keywords [FILE]`: Print the search keywords
//! - `tablemate types`: List the allowed cell types
//!
//! Exit codes:
//! - 0: Success
//! - 1: Validation failed
//! - 2: I/O or argument error

mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use tablemate_lib::TableField;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::commands::Outcome;
use crate::error::CliError;

const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn run(cli: Cli) -> Result<Outcome, CliError> {
    let settings = commands::load_settings(cli.settings.as_deref())?;
    let field = TableField::new(settings);

    match cli.command {
        Commands::Normalize(args) => commands::normalize(&field, &commands::read_input(&args)?, cli.fresh),
        Commands::Validate(args) => commands::validate(&field, &commands::read_input(&args)?, cli.fresh),
        Commands::Serialize(args) => commands::serialize(&field, &commands::read_input(&args)?, cli.fresh),
        Commands::Keywords(args) => commands::keywords(&field, &commands::read_input(&args)?, cli.fresh),
        Commands::Types => Ok(commands::types(&field)),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    WriteLogger::init(level, Config::default(), std::io::stderr())
        .expect("Failed to initialize logger");

    match run(cli) {
        Ok(Outcome::Print(text)) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Invalid(text)) => {
            println!("{}", text);
            ExitCode::from(EXIT_INVALID)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
