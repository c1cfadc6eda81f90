//! Storage serialization

use crate::emoji::unicode_to_shortcode;
use crate::error::TableError;
use crate::model::CellValue;
use crate::model::StoredTableValue;
use crate::model::TableValue;

/// Converts a table value to its storage form.
///
/// Ids are dropped and rows become cell lists aligned to the columns. Emoji
/// in single-line and multi-line cells are replaced by shortcodes.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tablemate_lib::normalize;
/// use tablemate_lib::serialize::serialize;
///
/// let table = normalize(&json!({
///     "columns": {"c1": {"heading": "Note"}},
///     "rows": [{"c1": "ship it 🚀"}]
/// }))
/// .unwrap();
///
/// let stored = serialize(&table);
/// assert_eq!(stored.rows[0][0].as_text(), Some("ship it :rocket:"));
/// ```
pub fn serialize(table: &TableValue) -> StoredTableValue {
    let mut stored = table.to_stored();

    for (index, column) in table.columns().iter().enumerate() {
        if !column.cell_type().is_text() {
            continue;
        }
        for row in &mut stored.rows {
            if let Some(CellValue::Text(text)) = row.get_mut(index) {
                *text = unicode_to_shortcode(text);
            }
        }
    }

    stored
}

/// Serializes an optional table value; an absent value stays absent.
pub fn serialize_value(table: Option<&TableValue>) -> Option<StoredTableValue> {
    table.map(serialize)
}

/// Serializes a table value straight to storage JSON text.
pub fn to_json(table: &TableValue) -> Result<String, TableError> {
    serialize(table).to_json_string()
}
