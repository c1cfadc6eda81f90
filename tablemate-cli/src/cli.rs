//! Command line definition

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

/// Runs the table field value pipeline over JSON documents.
///
/// Input is the raw value a host would submit (`{"columns": ..., "rows":
/// ...}`), read from a file or from stdin when no file (or `-`) is given.
#[derive(Parser, Debug)]
#[command(name = "tablemate")]
#[command(version)]
#[command(about = "Normalize, validate and serialize table field values")]
pub struct Cli {
    /// Field settings JSON file
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Treat the value as belonging to a record that was never saved
    #[arg(long, global = true)]
    pub fresh: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the normalized value in its keyed form
    Normalize(InputArgs),

    /// Validate the value and list every invalid cell
    Validate(InputArgs),

    /// Print the value in its storage form
    Serialize(InputArgs),

    /// Print the search keywords for the value
    Keywords(InputArgs),

    /// List the cell types the field settings allow
    Types,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input JSON file, `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Returns the input path, or `None` for stdin.
    pub fn path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
