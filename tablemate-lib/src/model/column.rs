//! Column definitions

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use super::CellType;
use super::types::SelectOption;

/// A column definition as stored: everything about a column except its id.
///
/// Keys the pipeline does not interpret (`width`, `handle`, ...) are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnDefinition {
    /// Column heading shown to editors.
    pub heading: String,
    /// Cell type used for normalization and validation.
    pub cell_type: CellType,
    /// Type name as declared, when it is not a known cell type.
    ///
    /// Written back in place of `cell_type` so an unrecognised type survives
    /// storage.
    pub declared_type: Option<String>,
    /// Dropdown options, meaningful only for [`CellType::Select`].
    pub options: Vec<SelectOption>,
    /// Unrecognised definition keys, in input order.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ColumnDefinition {
    /// Creates a new definition with the given heading and type.
    pub fn new(heading: impl Into<String>, cell_type: CellType) -> Self {
        Self {
            heading: heading.into(),
            cell_type,
            declared_type: None,
            options: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the dropdown options.
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Reads a definition from submitted or stored JSON.
    ///
    /// Never fails: a non-object entry becomes an untitled `singleline`
    /// column so positional alignment with stored rows is kept. A missing or
    /// empty `type` means `singleline`; an unknown one falls back to
    /// `singleline` with a warning.
    pub fn from_json(json: &serde_json::Value) -> Self {
        let Some(obj) = json.as_object() else {
            log::debug!("Column definition is not an object, using defaults");
            return Self::default();
        };

        let heading = match obj.get("heading") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let (cell_type, declared_type) = match obj.get("type") {
            Some(serde_json::Value::String(name)) if !name.is_empty() => match name.parse() {
                Ok(cell_type) => (cell_type, None),
                Err(_) => {
                    log::warn!("Unknown cell type '{}', treating as singleline", name);
                    (CellType::Singleline, Some(name.clone()))
                }
            },
            _ => (CellType::Singleline, None),
        };

        let options = SelectOption::list_from_json(obj.get("options"));

        let extra = obj
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "heading" | "type" | "options"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            heading,
            cell_type,
            declared_type,
            options,
            extra,
        }
    }

    /// Returns the first option marked as default.
    pub fn default_option(&self) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.default)
    }
}

impl Serialize for ColumnDefinition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("heading", &self.heading)?;
        match &self.declared_type {
            Some(name) => map.serialize_entry("type", name)?,
            None => map.serialize_entry("type", &self.cell_type)?,
        }
        if !self.options.is_empty() {
            map.serialize_entry("options", &self.options)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColumnDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json(&json))
    }
}

/// A column of the live (keyed) table form.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Id unique within the table; rows are keyed by it.
    pub id: String,
    /// Everything else about the column.
    pub definition: ColumnDefinition,
}

impl Column {
    /// Creates a new column.
    pub fn new(id: impl Into<String>, definition: ColumnDefinition) -> Self {
        Self {
            id: id.into(),
            definition,
        }
    }

    /// Creates the id for the column at `index` of a positional column list.
    pub fn positional_id(index: usize) -> String {
        format!("col{}", index + 1)
    }

    /// Returns the column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the column heading.
    pub fn heading(&self) -> &str {
        &self.definition.heading
    }

    /// Returns the declared cell type.
    pub fn cell_type(&self) -> CellType {
        self.definition.cell_type
    }
}
