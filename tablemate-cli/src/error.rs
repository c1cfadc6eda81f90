//! CliError for the command line tool

use std::path::PathBuf;

use tablemate_lib::TableError;

/// Error type for the command line tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading stdin failed.
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Field settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] TableError),

    /// Output could not be encoded.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Creates a new read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
