//! Validation error types

/// A single cell that failed validation.
///
/// Cells are unnamed inside a table, so the host attaches `message` to the
/// field as a whole. `row_index` and `column_id` are kept so a settings UI can
/// still highlight the offending cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellError {
    /// Zero-based position of the row within the table.
    pub row_index: usize,
    /// Id of the column the cell belongs to.
    pub column_id: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl CellError {
    /// Creates a new cell error.
    pub fn new(row_index: usize, column_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row_index,
            column_id: column_id.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}: {}", self.row_index, self.column_id, self.message)
    }
}

impl std::error::Error for CellError {}

/// Result of validating a whole table value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every cell passed validation.
    #[default]
    Valid,
    /// One or more cells failed validation, in row then column order.
    Invalid(Vec<CellError>),
}

impl ValidationResult {
    /// Builds a result from a collected error list.
    pub fn from_errors(errors: Vec<CellError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Check if every cell passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any cell failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all cell errors.
    pub fn errors(&self) -> &[CellError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first cell error (if any).
    pub fn first_error(&self) -> Option<&CellError> {
        self.errors().first()
    }

    /// Field-level messages, one per failing cell.
    pub fn messages(&self) -> Vec<&str> {
        self.errors().iter().map(|e| e.message.as_str()).collect()
    }

    /// Returns `true` if the given cell failed validation.
    pub fn has_error_at(&self, row_index: usize, column_id: &str) -> bool {
        self.errors()
            .iter()
            .any(|e| e.row_index == row_index && e.column_id == column_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_errors_empty_is_valid() {
        assert!(ValidationResult::from_errors(Vec::new()).is_valid());
    }

    #[test]
    fn test_messages_keep_order() {
        let result = ValidationResult::from_errors(vec![
            CellError::new(0, "col1", "first"),
            CellError::new(2, "col2", "second"),
        ]);

        assert!(result.is_invalid());
        assert_eq!(result.messages(), vec!["first", "second"]);
        assert!(result.has_error_at(2, "col2"));
        assert!(!result.has_error_at(1, "col2"));
    }

    #[test]
    fn test_cell_error_display() {
        let error = CellError::new(1, "col3", "bad");
        assert_eq!(error.to_string(), "row 1, column col3: bad");
    }
}
