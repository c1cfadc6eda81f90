//! Table value normalization
//!
//! Turns whatever the host hands over (submitted form JSON, a stored JSON
//! string, or nothing) into a [`TableValue`] with canonical typed cells, or
//! `None` when there is no usable table.
//!
//! Accepted shapes:
//!
//! - `columns` keyed by id (`{"col1": {...}}`, from the settings UI) or
//!   positional (`[{...}]`, from storage; ids become `col1`, `col2`, ...).
//! - `rows` as an array or an object keyed by row id (row ids are dropped,
//!   order is kept).
//! - each row keyed by column id or positional (aligned by column index).

mod cell;
mod datetime;

pub use cell::normalize_cell;
pub(crate) use cell::trim_cell_text;
pub use datetime::Moment;
pub use datetime::parse_moment;

use serde_json::Map;
use serde_json::Value;

use crate::model::CellValue;
use crate::model::Column;
use crate::model::ColumnDefinition;
use crate::model::Row;
use crate::model::TableValue;

/// Normalizes raw table input.
///
/// Equivalent to `Normalizer::new().normalize(raw)`.
pub fn normalize(raw: &Value) -> Option<TableValue> {
    Normalizer::new().normalize(raw)
}

/// Normalizes table input given as JSON text.
pub fn normalize_str(raw: &str) -> Option<TableValue> {
    Normalizer::new().normalize_str(raw)
}

/// Re-runs cell normalization over an existing table value.
///
/// Used after cells were edited through [`TableValue::rows_mut`]. Canonical
/// cells are left as they are.
pub fn renormalize(mut table: TableValue) -> TableValue {
    let columns = table.columns.clone();
    for row in &mut table.rows {
        row.retain_columns(&columns);
        for column in &columns {
            let value = row.get(&column.id).cloned().unwrap_or_default();
            row.insert(column.id.clone(), normalize_cell(column.cell_type(), value));
        }
    }
    table
}

/// Table normalizer.
///
/// `fresh` marks a record that has never been saved: a missing value is then
/// replaced by an empty `{columns: [], rows: []}` placeholder before
/// normalization. The placeholder has no columns, so the result is still
/// `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    fresh: bool,
}

impl Normalizer {
    /// Creates a normalizer for an existing record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the enclosing record is newly created.
    pub fn with_fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }

    /// Normalizes raw table input.
    ///
    /// A JSON string is decoded first; a string that is not valid JSON
    /// normalizes to `None`.
    pub fn normalize(&self, raw: &Value) -> Option<TableValue> {
        match raw {
            Value::String(s) if !s.is_empty() => self.normalize_str(s),
            Value::Null if self.fresh => {
                log::trace!("Fresh record without a value, using empty placeholder");
                normalize_object(&empty_placeholder())
            }
            Value::Object(obj) => normalize_object(obj),
            _ => None,
        }
    }

    /// Normalizes table input given as JSON text.
    pub fn normalize_str(&self, raw: &str) -> Option<TableValue> {
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(obj)) => normalize_object(&obj),
            Ok(_) => None,
            Err(e) => {
                log::debug!("Table value is not valid JSON: {}", e);
                None
            }
        }
    }
}

fn empty_placeholder() -> Map<String, Value> {
    let mut obj = Map::new();
    obj.insert("columns".to_string(), Value::Array(Vec::new()));
    obj.insert("rows".to_string(), Value::Array(Vec::new()));
    obj
}

fn normalize_object(obj: &Map<String, Value>) -> Option<TableValue> {
    let columns = read_columns(obj.get("columns"))?;

    let rows = match obj.get("rows") {
        Some(Value::Array(rows)) => rows.iter().map(|raw| read_row(raw, &columns)).collect(),
        Some(Value::Object(rows)) => rows.values().map(|raw| read_row(raw, &columns)).collect(),
        _ => Vec::new(),
    };

    Some(TableValue { columns, rows })
}

fn read_columns(raw: Option<&Value>) -> Option<Vec<Column>> {
    let columns: Vec<Column> = match raw? {
        Value::Object(keyed) => keyed
            .iter()
            .map(|(id, def)| Column::new(id.clone(), ColumnDefinition::from_json(def)))
            .collect(),
        Value::Array(positional) => positional
            .iter()
            .enumerate()
            .map(|(index, def)| {
                Column::new(Column::positional_id(index), ColumnDefinition::from_json(def))
            })
            .collect(),
        _ => return None,
    };

    (!columns.is_empty()).then_some(columns)
}

fn read_row(raw: &Value, columns: &[Column]) -> Row {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let cell = match raw {
                Value::Object(keyed) => keyed.get(&column.id),
                Value::Array(positional) => positional.get(index),
                _ => None,
            };
            let value = cell.cloned().map(CellValue::from_json).unwrap_or_default();
            (column.id.clone(), normalize_cell(column.cell_type(), value))
        })
        .collect()
}
