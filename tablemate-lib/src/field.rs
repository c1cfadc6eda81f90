//! Table field

use serde_json::Value;

use crate::error::ValidationResult;
use crate::keywords::search_keywords;
use crate::model::StoredTableValue;
use crate::model::TableValue;
use crate::normalize::Normalizer;
use crate::serialize::serialize_value;
use crate::settings::FieldSettings;
use crate::validate::Validator;

/// A configured table field.
///
/// Runs the value pipeline with one field's settings applied.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tablemate_lib::TableField;
///
/// let field = TableField::default();
/// let value = field.normalize(&json!({
///     "columns": {"a": {"heading": "Mail", "type": "email"}},
///     "rows": [{"a": "someone@example.com"}]
/// }), false);
///
/// assert!(field.validate(value.as_ref()).is_valid());
/// assert_eq!(field.search_keywords(value.as_ref()), "someone@example.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableField {
    settings: FieldSettings,
}

impl TableField {
    /// Creates a field with the given settings.
    pub fn new(settings: FieldSettings) -> Self {
        Self { settings }
    }

    /// Returns the field settings.
    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Normalizes a raw value. `fresh` marks a record that was never saved.
    pub fn normalize(&self, raw: &Value, fresh: bool) -> Option<TableValue> {
        Normalizer::new().with_fresh(fresh).normalize(raw)
    }

    /// Validates a normalized value; an absent value is valid.
    pub fn validate(&self, value: Option<&TableValue>) -> ValidationResult {
        match value {
            Some(table) => Validator::with_config(self.settings.validation.clone()).validate_table(table),
            None => ValidationResult::Valid,
        }
    }

    /// Converts a normalized value to its storage form.
    pub fn serialize(&self, value: Option<&TableValue>) -> Option<StoredTableValue> {
        serialize_value(value)
    }

    /// Returns the search keywords for a normalized value.
    pub fn search_keywords(&self, value: Option<&TableValue>) -> String {
        search_keywords(value)
    }
}
