//! Search keyword extraction

use crate::model::TableValue;

/// Flattens a table value into text for the host's search index.
///
/// Every non-null cell is rendered as text, in row then column order, and
/// joined with single spaces. Date and time cells are skipped. Values are
/// not deduplicated.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tablemate_lib::keywords::search_keywords;
/// use tablemate_lib::normalize;
///
/// let table = normalize(&json!({
///     "columns": {"a": {"type": "singleline"}, "b": {"type": "date"}},
///     "rows": [{"a": "hello", "b": "2024-01-01"}]
/// }));
///
/// assert_eq!(search_keywords(table.as_ref()), "hello");
/// assert_eq!(search_keywords(None), "");
/// ```
pub fn search_keywords(table: Option<&TableValue>) -> String {
    let Some(table) = table else {
        return String::new();
    };

    let keywords: Vec<String> = table
        .rows()
        .iter()
        .flat_map(|row| row.cells_in(table.columns()))
        .filter(|cell| !cell.is_null() && !cell.is_temporal())
        .map(|cell| cell.to_text())
        .collect();

    keywords.join(" ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_no_rows() {
        let table = normalize(&json!({"columns": {"a": {}}, "rows": []}));
        assert_eq!(search_keywords(table.as_ref()), "");
    }

    #[test]
    fn test_row_then_column_order() {
        let table = normalize(&json!({
            "columns": {
                "name": {"type": "singleline"},
                "qty": {"type": "number"},
                "done": {"type": "checkbox"},
                "tint": {"type": "color"}
            },
            "rows": [
                {"name": "apples", "qty": 3, "done": true, "tint": "f00"},
                {"name": "apples", "qty": 1.5}
            ]
        }));

        assert_eq!(
            search_keywords(table.as_ref()),
            "apples 3 1 #ff0000 apples 1.5"
        );
    }

    #[test]
    fn test_skips_temporal_and_null() {
        let table = normalize(&json!({
            "columns": {"t": {"type": "time"}, "s": {"type": "singleline"}},
            "rows": [{"t": "10:00", "s": null}, {"t": null, "s": "x"}]
        }));

        assert_eq!(search_keywords(table.as_ref()), "x");
    }

    #[test]
    fn test_false_renders_empty() {
        let table = normalize(&json!({
            "columns": {"a": {"type": "lightswitch"}, "b": {"type": "singleline"}},
            "rows": [{"a": false, "b": "on"}]
        }));

        assert_eq!(search_keywords(table.as_ref()), " on");
    }
}
