//! Field settings supplied by the host

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use super::ValidationConfig;
use crate::error::TableError;
use crate::model::CellType;

/// Default label of the button that adds a column.
pub const DEFAULT_COLUMNS_ADD_ROW_LABEL: &str = "Add column";

/// Default label of the button that adds a row.
pub const DEFAULT_ROWS_ADD_ROW_LABEL: &str = "Add row";

/// Which cell types editors may pick for a column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedTypes {
    /// Every type (`"*"`).
    #[default]
    All,
    /// Only the listed types.
    Only(Vec<CellType>),
}

impl AllowedTypes {
    /// Returns `true` if the type may be picked.
    pub fn allows(&self, cell_type: CellType) -> bool {
        match self {
            AllowedTypes::All => true,
            AllowedTypes::Only(types) => types.contains(&cell_type),
        }
    }
}

impl Serialize for AllowedTypes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AllowedTypes::All => serializer.serialize_str("*"),
            AllowedTypes::Only(types) => types.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AllowedTypes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) if s == "*" => Ok(AllowedTypes::All),
            serde_json::Value::Array(items) => Ok(AllowedTypes::Only(
                items
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .filter_map(|name| match name.parse() {
                        Ok(cell_type) => Some(cell_type),
                        Err(_) => {
                            log::warn!("Ignoring unknown allowed type '{}'", name);
                            None
                        }
                    })
                    .collect(),
            )),
            other => Err(serde::de::Error::custom(format!(
                "expected \"*\" or a list of cell types, got {}",
                other
            ))),
        }
    }
}

/// Storage column the host should create for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentColumnType {
    /// Let the host decide.
    Auto,
    /// Short text (`VARCHAR`).
    String,
    /// Long text.
    #[default]
    Text,
    /// Medium text, for large tables.
    MediumText,
}

impl ContentColumnType {
    /// Returns the host's name for the column type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentColumnType::Auto => "auto",
            ContentColumnType::String => "string",
            ContentColumnType::Text => "text",
            ContentColumnType::MediumText => "mediumtext",
        }
    }
}

impl fmt::Display for ContentColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field configuration.
///
/// Labels and instructions only matter to the host's settings UI; the
/// allow-list and storage column type are read by the host when it sets
/// the field up. `validation` configures the cell validators.
///
/// # Example
///
/// ```
/// use tablemate_lib::model::CellType;
/// use tablemate_lib::settings::FieldSettings;
///
/// let settings = FieldSettings::default()
///     .with_allowed_types([CellType::Singleline, CellType::Number]);
///
/// assert!(settings.is_type_allowed(CellType::Number));
/// assert!(!settings.is_type_allowed(CellType::Color));
/// assert_eq!(settings.rows_add_row_label(), "Add row");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSettings {
    /// Label above the columns editor.
    pub columns_label: Option<String>,
    /// Instructions for the columns editor.
    pub columns_instructions: Option<String>,
    /// Label of the add-column button.
    pub columns_add_row_label: Option<String>,
    /// Label above the rows editor.
    pub rows_label: Option<String>,
    /// Instructions for the rows editor.
    pub rows_instructions: Option<String>,
    /// Label of the add-row button.
    pub rows_add_row_label: Option<String>,
    /// Cell types offered to editors.
    pub allowed_type_options: AllowedTypes,
    /// Storage column type.
    pub column_type: ContentColumnType,
    /// Validation rules.
    pub validation: ValidationConfig,
}

impl FieldSettings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes settings from host JSON.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        serde_json::from_str(json).map_err(|e| TableError::settings(e.to_string()))
    }

    /// Restricts the types editors may pick.
    pub fn with_allowed_types(mut self, types: impl IntoIterator<Item = CellType>) -> Self {
        self.allowed_type_options = AllowedTypes::Only(types.into_iter().collect());
        self
    }

    /// Sets the storage column type.
    pub fn with_column_type(mut self, column_type: ContentColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    /// Sets the validation rules.
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Every cell type with its label, in the host's listing order.
    pub fn type_options() -> Vec<(CellType, &'static str)> {
        CellType::ALL.iter().map(|t| (*t, t.label())).collect()
    }

    /// The type options editors may pick, in the host's listing order.
    pub fn allowed_type_options(&self) -> Vec<(CellType, &'static str)> {
        Self::type_options()
            .into_iter()
            .filter(|(t, _)| self.allowed_type_options.allows(*t))
            .collect()
    }

    /// The allowed type options sorted by label, as the settings UI lists them.
    pub fn sorted_type_options(&self) -> Vec<(CellType, &'static str)> {
        let mut options = self.allowed_type_options();
        options.sort_by(|a, b| a.1.cmp(b.1));
        options
    }

    /// Whether the settings UI shows a type picker at all.
    ///
    /// With a single allowed type there is nothing to choose.
    pub fn shows_type_picker(&self) -> bool {
        self.allowed_type_options().len() > 1
    }

    /// Returns `true` if editors may pick the type.
    pub fn is_type_allowed(&self, cell_type: CellType) -> bool {
        self.allowed_type_options.allows(cell_type)
    }

    /// Returns the storage column type.
    pub fn content_column_type(&self) -> ContentColumnType {
        self.column_type
    }

    /// Label of the add-column button.
    pub fn columns_add_row_label(&self) -> &str {
        self.columns_add_row_label
            .as_deref()
            .unwrap_or(DEFAULT_COLUMNS_ADD_ROW_LABEL)
    }

    /// Label of the add-row button.
    pub fn rows_add_row_label(&self) -> &str {
        self.rows_add_row_label
            .as_deref()
            .unwrap_or(DEFAULT_ROWS_ADD_ROW_LABEL)
    }

    /// Both add-row labels, columns first.
    pub fn add_row_labels(&self) -> (&str, &str) {
        (self.columns_add_row_label(), self.rows_add_row_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = FieldSettings::default();
        assert_eq!(settings.allowed_type_options().len(), 11);
        assert_eq!(settings.content_column_type(), ContentColumnType::Text);
        assert_eq!(settings.add_row_labels(), ("Add column", "Add row"));
        assert!(settings.shows_type_picker());
    }

    #[test]
    fn test_from_host_json() {
        let settings = FieldSettings::from_json(
            r#"{
                "columnsLabel": "Columns",
                "rowsAddRowLabel": "New line",
                "allowedTypeOptions": ["singleline", "url", "bogus"],
                "columnType": "mediumtext"
            }"#,
        )
        .unwrap();

        assert_eq!(settings.columns_label.as_deref(), Some("Columns"));
        assert_eq!(settings.rows_add_row_label(), "New line");
        assert_eq!(
            settings.allowed_type_options,
            AllowedTypes::Only(vec![CellType::Singleline, CellType::Url])
        );
        assert_eq!(settings.content_column_type().as_str(), "mediumtext");
    }

    #[test]
    fn test_wildcard_allow_list() {
        let settings = FieldSettings::from_json(r#"{"allowedTypeOptions": "*"}"#).unwrap();
        assert_eq!(settings.allowed_type_options, AllowedTypes::All);
    }

    #[test]
    fn test_bad_allow_list() {
        let err = FieldSettings::from_json(r#"{"allowedTypeOptions": 7}"#).unwrap_err();
        assert!(matches!(err, TableError::Settings { .. }));
    }

    #[test]
    fn test_sorted_by_label() {
        let settings = FieldSettings::default().with_allowed_types([
            CellType::Url,
            CellType::Select,
            CellType::Multiline,
        ]);

        let labels: Vec<_> = settings.sorted_type_options().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["Dropdown", "Multi-line text", "URL"]);

        let order: Vec<_> = settings.allowed_type_options().into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec![CellType::Select, CellType::Multiline, CellType::Url]);
    }

    #[test]
    fn test_single_type_hides_picker() {
        let settings = FieldSettings::default().with_allowed_types([CellType::Singleline]);
        assert!(!settings.shows_type_picker());
    }

    #[test]
    fn test_serialize_wildcard() {
        let json = serde_json::to_value(FieldSettings::default()).unwrap();
        assert_eq!(json["allowedTypeOptions"], "*");
        assert_eq!(json["columnType"], "text");
    }
}
