//! Positional (storage) table value
//!
//! ## Storage format
//!
//! ```json
//! {
//!   "columns": [{"heading": "Name", "type": "singleline"}, {"heading": "Qty", "type": "number"}],
//!   "rows": [["Apples", 3], ["Pears", 5]]
//! }
//! ```
//!
//! Column and row ids are not stored. When a stored value is read back, the
//! columns get ids from their position (`col1`, `col2`, ...) and each row's
//! cells are matched to columns by index. Reordering or removing a column in
//! the field settings therefore shifts the cells of rows saved before the
//! change.

use serde::Deserialize;
use serde::Serialize;

use super::CellValue;
use super::Column;
use super::ColumnDefinition;
use super::Row;
use super::TableValue;
use crate::error::TableError;

/// A table value in its flat, storage-ready form.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StoredTableValue {
    /// Column definitions in display order.
    pub columns: Vec<ColumnDefinition>,
    /// Rows as cell lists aligned to `columns`.
    pub rows: Vec<Vec<CellValue>>,
}

impl StoredTableValue {
    /// Decodes a stored value from JSON text.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let value: Self = serde_json::from_str(json)?;
        if value.columns.is_empty() {
            return Err(TableError::invalid_shape("stored value has no columns"));
        }
        Ok(value)
    }

    /// Encodes the value as compact JSON text.
    pub fn to_json_string(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Converts back to the keyed form, assigning positional column ids.
    ///
    /// Cells beyond the last column are dropped. Returns `None` when there
    /// are no columns. Cell values are taken as they are; use
    /// [`crate::normalize`] on the JSON form to get typed cells back.
    pub fn into_table(self) -> Option<TableValue> {
        if self.columns.is_empty() {
            return None;
        }

        let columns: Vec<Column> = self
            .columns
            .into_iter()
            .enumerate()
            .map(|(index, definition)| Column::new(Column::positional_id(index), definition))
            .collect();

        let rows = self
            .rows
            .into_iter()
            .map(|cells| {
                columns
                    .iter()
                    .zip(cells)
                    .map(|(column, cell)| (column.id.clone(), cell))
                    .collect::<Row>()
            })
            .collect();

        Some(TableValue { columns, rows })
    }
}

impl From<&TableValue> for StoredTableValue {
    fn from(table: &TableValue) -> Self {
        let columns = table
            .columns
            .iter()
            .map(|column| column.definition.clone())
            .collect();

        let rows = table
            .rows
            .iter()
            .map(|row| row.cells_in(&table.columns).cloned().collect())
            .collect();

        Self { columns, rows }
    }
}

#[derive(Deserialize)]
struct RawStored {
    #[serde(default)]
    columns: Vec<ColumnDefinition>,
    #[serde(default)]
    rows: Vec<Vec<serde_json::Value>>,
}

impl<'de> Deserialize<'de> for StoredTableValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawStored::deserialize(deserializer)?;
        Ok(Self {
            columns: raw.columns,
            rows: raw
                .rows
                .into_iter()
                .map(|cells| cells.into_iter().map(CellValue::from_json).collect())
                .collect(),
        })
    }
}
