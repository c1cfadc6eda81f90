//! Dropdown option types

use serde::Serialize;

/// One option of a `select` column.
///
/// The host settings UI edits these in a small nested table with
/// `label`, `value` and `default` columns, so `default` may arrive as a
/// boolean, `"1"` or an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Display label.
    pub label: String,
    /// Stored value.
    pub value: String,
    /// Whether this option is preselected.
    pub default: bool,
}

impl SelectOption {
    /// Creates a new non-default option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            default: false,
        }
    }

    /// Marks this option as the default.
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Reads an option from submitted JSON, or `None` if it is not an object.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        let obj = json.as_object()?;
        let text = |key: &str| match obj.get(key) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let default = match obj.get("default") {
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => !s.is_empty() && s != "0",
            Some(serde_json::Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
            _ => false,
        };

        Some(Self {
            label: text("label"),
            value: text("value"),
            default,
        })
    }

    /// Reads an option list from either an array or a keyed object.
    pub fn list_from_json(json: Option<&serde_json::Value>) -> Vec<Self> {
        match json {
            Some(serde_json::Value::Array(items)) => {
                items.iter().filter_map(Self::from_json).collect()
            }
            Some(serde_json::Value::Object(items)) => {
                items.values().filter_map(Self::from_json).collect()
            }
            _ => Vec::new(),
        }
    }
}
