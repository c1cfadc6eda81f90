//! Cell and table validation
//!
//! Validation runs on normalized values. Empty cells always pass; required
//! cells are not a concept here. Every failing cell is reported, so a host
//! can show all problems at once.

mod rules;

use crate::error::CellError;
use crate::error::ValidationResult;
use crate::model::CellType;
use crate::model::CellValue;
use crate::model::TableValue;
use crate::normalize::trim_cell_text;
use crate::settings::ValidationConfig;

/// Validates one cell with the default configuration.
pub fn validate_cell(cell_type: CellType, value: &CellValue) -> Result<(), String> {
    Validator::new().validate_cell(cell_type, value)
}

/// Validates a whole table with the default configuration.
pub fn validate_table(table: &TableValue) -> ValidationResult {
    Validator::new().validate_table(table)
}

/// Table validator.
///
/// # Example
///
/// ```
/// use tablemate_lib::model::CellType;
/// use tablemate_lib::model::CellValue;
/// use tablemate_lib::validate::Validator;
///
/// let validator = Validator::new();
/// assert!(validator.validate_cell(CellType::Email, &CellValue::from("a@b.com")).is_ok());
/// assert!(validator.validate_cell(CellType::Email, &CellValue::from("")).is_ok());
/// assert!(validator.validate_cell(CellType::Email, &CellValue::from("nope")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Creates a validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given configuration.
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates one cell against its column type.
    ///
    /// Returns the formatted error message when the cell is invalid.
    pub fn validate_cell(&self, cell_type: CellType, value: &CellValue) -> Result<(), String> {
        let text = value.to_text();
        if text.is_empty() {
            return Ok(());
        }

        match cell_type {
            CellType::Color => rules::color(&text),
            CellType::Email => rules::email(&text),
            CellType::Url => rules::url(&text, &self.config),
            CellType::Singleline
            | CellType::Multiline
            | CellType::Number
            | CellType::Date
            | CellType::Time
            | CellType::Checkbox
            | CellType::Lightswitch
            | CellType::Select => Ok(()),
        }
    }

    /// Validates every cell of every row.
    ///
    /// Text cells are trimmed before their rule runs. A table without rows
    /// is always valid.
    pub fn validate_table(&self, table: &TableValue) -> ValidationResult {
        if table.has_no_rows() {
            return ValidationResult::Valid;
        }

        let mut errors = Vec::new();
        for (row_index, row) in table.rows().iter().enumerate() {
            for (column, cell) in table.columns().iter().zip(row.cells_in(table.columns())) {
                let result = match cell {
                    CellValue::Text(text) => {
                        let trimmed = CellValue::from(trim_cell_text(text));
                        self.validate_cell(column.cell_type(), &trimmed)
                    }
                    other => self.validate_cell(column.cell_type(), other),
                };

                if let Err(message) = result {
                    log::debug!("Row {} column '{}' is invalid: {}", row_index, column.id(), message);
                    errors.push(CellError::new(row_index, column.id(), message));
                }
            }
        }

        ValidationResult::from_errors(errors)
    }
}
