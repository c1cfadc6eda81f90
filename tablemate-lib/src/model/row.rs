//! Table rows

use std::collections::HashMap;

use super::CellValue;
use super::Column;

static NULL: CellValue = CellValue::Null;

/// One row of the live table form, keyed by column id.
///
/// Rows carry no order of their own; iteration follows the table's columns.
///
/// # Example
///
/// ```
/// use tablemate_lib::model::Row;
///
/// let row = Row::new()
///     .set("col1", "Apples")
///     .set("col2", 12i64);
///
/// assert_eq!(row.get_text("col1"), Some("Apples"));
/// assert!(row.get("col3").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell value, returning the row for chaining.
    pub fn set(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column_id.into(), value.into());
        self
    }

    /// Inserts a cell value, returning the previous one.
    pub fn insert(&mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Option<CellValue> {
        self.cells.insert(column_id.into(), value.into())
    }

    /// Returns a reference to the cell value, if it exists.
    pub fn get(&self, column_id: &str) -> Option<&CellValue> {
        self.cells.get(column_id)
    }

    /// Returns a mutable reference to the cell value, if it exists.
    pub fn get_mut(&mut self, column_id: &str) -> Option<&mut CellValue> {
        self.cells.get_mut(column_id)
    }

    /// Returns the cell as a string, if it holds text.
    pub fn get_text(&self, column_id: &str) -> Option<&str> {
        self.get(column_id).and_then(CellValue::as_text)
    }

    /// Returns `true` if the row has a value for the given column.
    pub fn contains(&self, column_id: &str) -> bool {
        self.cells.contains_key(column_id)
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell for each column in column order, `Null` where missing.
    pub fn cells_in<'a>(&'a self, columns: &'a [Column]) -> impl Iterator<Item = &'a CellValue> + 'a {
        columns
            .iter()
            .map(|col| self.cells.get(&col.id).unwrap_or(&NULL))
    }

    /// Removes cells whose keys are not column ids.
    pub fn retain_columns(&mut self, columns: &[Column]) {
        self.cells.retain(|key, _| columns.iter().any(|col| &col.id == key));
    }
}

impl FromIterator<(String, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
