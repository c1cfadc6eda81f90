//! Subcommand implementations
//!
//! Each command returns what it would print, so `main` owns stdout.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tablemate_lib::FieldSettings;
use tablemate_lib::TableField;
use tablemate_lib::ValidationResult;

use crate::cli::InputArgs;
use crate::error::CliError;

/// Outcome of a command.
#[derive(Debug)]
pub enum Outcome {
    /// Print the text and exit successfully.
    Print(String),
    /// Print the text and exit with the validation failure status.
    Invalid(String),
}

/// Loads field settings from a file, or the defaults.
pub fn load_settings(path: Option<&Path>) -> Result<FieldSettings, CliError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
            Ok(FieldSettings::from_json(&json)?)
        }
        None => Ok(FieldSettings::default()),
    }
}

/// Reads the raw value from the input file or stdin.
///
/// Input that is not JSON is passed on as a string, which normalizes to an
/// absent value.
pub fn read_input(args: &InputArgs) -> Result<Value, CliError> {
    let text = match args.path() {
        Some(path) => fs::read_to_string(path).map_err(|e| CliError::read(path, e))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            text
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text).unwrap_or_else(|e| {
        log::warn!("Input is not valid JSON: {}", e);
        Value::String(text.to_string())
    }))
}

pub fn normalize(field: &TableField, raw: &Value, fresh: bool) -> Result<Outcome, CliError> {
    let value = field.normalize(raw, fresh);
    Ok(Outcome::Print(serde_json::to_string_pretty(&value)?))
}

pub fn validate(field: &TableField, raw: &Value, fresh: bool) -> Result<Outcome, CliError> {
    let value = field.normalize(raw, fresh);
    match field.validate(value.as_ref()) {
        ValidationResult::Valid => Ok(Outcome::Print("valid".to_string())),
        ValidationResult::Invalid(errors) => {
            let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
            Ok(Outcome::Invalid(lines.join("\n")))
        }
    }
}

pub fn serialize(field: &TableField, raw: &Value, fresh: bool) -> Result<Outcome, CliError> {
    let value = field.normalize(raw, fresh);
    let stored = field.serialize(value.as_ref());
    Ok(Outcome::Print(serde_json::to_string(&stored)?))
}

pub fn keywords(field: &TableField, raw: &Value, fresh: bool) -> Result<Outcome, CliError> {
    let value = field.normalize(raw, fresh);
    Ok(Outcome::Print(field.search_keywords(value.as_ref())))
}

pub fn types(field: &TableField) -> Outcome {
    let lines: Vec<String> = field
        .settings()
        .sorted_type_options()
        .into_iter()
        .map(|(cell_type, label)| format!("{}\t{}", cell_type, label))
        .collect();
    Outcome::Print(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tablemate_lib::CellType;

    use super::*;

    fn raw() -> Value {
        json!({
            "columns": {"a": {"heading": "Mail", "type": "email"}},
            "rows": [{"a": "nope"}, {"a": "yes@example.com"}]
        })
    }

    #[test]
    fn test_validate_reports_cells() {
        match validate(&TableField::default(), &raw(), false).unwrap() {
            Outcome::Invalid(text) => {
                assert_eq!(text, "row 0, column a: nope is not a valid email address.")
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_serialize_absent_is_null() {
        match serialize(&TableField::default(), &Value::Null, true).unwrap() {
            Outcome::Print(text) => assert_eq!(text, "null"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_keywords() {
        match keywords(&TableField::default(), &raw(), false).unwrap() {
            Outcome::Print(text) => assert_eq!(text, "nope yes@example.com"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_types_follow_settings() {
        let field = TableField::new(
            FieldSettings::default().with_allowed_types([CellType::Url, CellType::Select]),
        );
        match types(&field) {
            Outcome::Print(text) => assert_eq!(text, "select\tDropdown\nurl\tURL"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_missing_settings_file() {
        let err = load_settings(Some(Path::new("/nonexistent/settings.json"))).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
