//! Live (keyed) table value

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use super::CellValue;
use super::Column;
use super::Row;
use super::StoredTableValue;
use crate::error::TableError;

/// A normalized table value in its live, keyed form.
///
/// This is the shape the host settings UI edits: columns carry ids and rows
/// are keyed by those ids. Storage uses [`StoredTableValue`] instead.
///
/// # Invariants
///
/// - `columns` is never empty; a table without columns is absent, not empty.
/// - Column ids are unique.
/// - Every row's keys are a subset of the column ids.
#[derive(Debug, Clone, PartialEq)]
pub struct TableValue {
    pub(crate) columns: Vec<Column>,
    pub(crate) rows: Vec<Row>,
}

impl TableValue {
    /// Creates a table value, enforcing the invariants above.
    ///
    /// Row keys that do not match a column id are dropped.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::invalid_shape("a table needs at least one column"));
        }
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|c| c.id == column.id) {
                return Err(TableError::invalid_shape(format!(
                    "duplicate column id '{}'",
                    column.id
                )));
            }
        }

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.retain_columns(&columns);
                row
            })
            .collect();

        Ok(Self { columns, rows })
    }

    /// Returns the columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns mutable access to the rows.
    ///
    /// Cells written here are not normalized; run the value through
    /// [`crate::normalize`] again if they came from user input.
    pub fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    /// Returns the column with the given id.
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns the cell at the given row and column.
    pub fn cell(&self, row_index: usize, column_id: &str) -> Option<&CellValue> {
        self.rows.get(row_index)?.get(column_id)
    }

    /// Returns `true` if the table has no rows.
    pub fn has_no_rows(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts to the positional storage form, dropping column and row ids.
    pub fn to_stored(&self) -> StoredTableValue {
        StoredTableValue::from(self)
    }
}

impl Serialize for TableValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("columns", &KeyedColumns(&self.columns))?;
        let rows: Vec<KeyedRow<'_>> = self
            .rows
            .iter()
            .map(|row| KeyedRow {
                columns: &self.columns,
                row,
            })
            .collect();
        map.serialize_entry("rows", &rows)?;
        map.end()
    }
}

/// Columns as an id-keyed map, in column order.
struct KeyedColumns<'a>(&'a [Column]);

impl Serialize for KeyedColumns<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for column in self.0 {
            map.serialize_entry(&column.id, &column.definition)?;
        }
        map.end()
    }
}

/// A row as a column-id-keyed map, in column order.
struct KeyedRow<'a> {
    columns: &'a [Column],
    row: &'a Row,
}

impl Serialize for KeyedRow<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.row.cells_in(self.columns)) {
            map.serialize_entry(&column.id, cell)?;
        }
        map.end()
    }
}
