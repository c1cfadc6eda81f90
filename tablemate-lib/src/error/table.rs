//! TableError for explicit decoding paths

/// Error type for operations that decode table values or field settings.
///
/// The normalizer never returns these: malformed input normalizes to an
/// absent value instead. They surface only from the explicit `from_json`
/// style constructors a host calls when it wants to know *why* a document
/// was rejected.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The input was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was well-formed but does not describe a table.
    #[error("Invalid table value: {reason}")]
    InvalidShape { reason: String },

    /// A cell type name is not one of the known types.
    #[error("Unknown cell type '{0}'")]
    UnknownCellType(String),

    /// Field settings could not be decoded.
    #[error("Invalid field settings: {reason}")]
    Settings { reason: String },
}

impl TableError {
    /// Creates a new invalid shape error.
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }

    /// Creates a new settings error.
    pub fn settings(reason: impl Into<String>) -> Self {
        Self::Settings {
            reason: reason.into(),
        }
    }
}
