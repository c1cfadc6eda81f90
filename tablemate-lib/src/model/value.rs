//! CellValue enum for dynamic cell values

use chrono::NaiveDate;
use chrono::NaiveTime;
use serde::Serialize;
use serde::Serializer;

use super::types::HexColor;

/// Date format used when a date cell is written to storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used when a time cell is written to storage.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A dynamic value held by one table cell.
///
/// Raw input is first read structurally (`Null`, `Bool`, `Number`, `Text`,
/// `Json`) and then normalized per the column's [`CellType`](super::CellType)
/// into the typed variants (`Date`, `Time`, `Color`, trimmed `Text`).
///
/// # Type Mapping
///
/// | Cell type | Normalized variant |
/// |-----------|--------------------|
/// | singleline, multiline | `Text` or `Null` |
/// | date | `Date` or `Null` |
/// | time | `Time` or `Null` |
/// | color | `Color` or `Null` |
/// | everything else | whatever the raw input was |
///
/// # Example
///
/// ```
/// use tablemate_lib::model::CellValue;
///
/// let text = CellValue::from("hello");
/// let flag = CellValue::from(true);
/// let empty = CellValue::Null;
/// assert!(empty.is_blank());
/// assert_eq!(text.to_text(), "hello");
/// assert_eq!(flag.to_text(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value (checkbox, lightswitch).
    Bool(bool),
    /// Numeric value, kept in its JSON representation.
    Number(serde_json::Number),
    /// String value.
    Text(String),
    /// Calendar date without time zone.
    Date(NaiveDate),
    /// Wall-clock time without date.
    Time(NaiveTime),
    /// Canonical hex colour.
    Color(HexColor),
    /// Structured raw value (array or object) passed through untouched.
    Json(serde_json::Value),
}

impl CellValue {
    /// Reads a raw JSON value structurally, without any type-specific parsing.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            serde_json::Value::Number(n) => CellValue::Number(n),
            serde_json::Value::String(s) => CellValue::Text(s),
            other => CellValue::Json(other),
        }
    }

    /// Converts the value into its storage JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::Bool(b) => serde_json::Value::Bool(*b),
            CellValue::Number(n) => serde_json::Value::Number(n.clone()),
            CellValue::Text(s) => serde_json::Value::String(s.clone()),
            CellValue::Date(d) => serde_json::Value::String(d.format(DATE_FORMAT).to_string()),
            CellValue::Time(t) => serde_json::Value::String(t.format(TIME_FORMAT).to_string()),
            CellValue::Color(c) => serde_json::Value::String(c.hex().to_string()),
            CellValue::Json(v) => v.clone(),
        }
    }

    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns `true` for null and the empty string, the values every cell
    /// type accepts.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns `true` for date and time values.
    pub fn is_temporal(&self) -> bool {
        matches!(self, CellValue::Date(_) | CellValue::Time(_))
    }

    /// Returns the string, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number as `f64`, if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the date, if this is a date value.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the time, if this is a time value.
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            CellValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the colour, if this is a colour value.
    pub fn as_color(&self) -> Option<&HexColor> {
        match self {
            CellValue::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Renders the value as plain text.
    ///
    /// Booleans follow the host's string conversion: `true` is `"1"` and
    /// `false` is empty.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(true) => "1".to_string(),
            CellValue::Bool(false) => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            CellValue::Time(t) => t.format(TIME_FORMAT).to_string(),
            CellValue::Color(c) => c.hex().to_string(),
            CellValue::Json(v) => v.to_string(),
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "text",
            CellValue::Date(_) => "date",
            CellValue::Time(_) => "time",
            CellValue::Color(_) => "color",
            CellValue::Json(_) => "json",
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Number(n) => n.serialize(serializer),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Date(d) => serializer.collect_str(&d.format(DATE_FORMAT)),
            CellValue::Time(t) => serializer.collect_str(&t.format(TIME_FORMAT)),
            CellValue::Color(c) => serializer.serialize_str(c.hex()),
            CellValue::Json(v) => v.serialize(serializer),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(v.into())
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        serde_json::Number::from_f64(v)
            .map(CellValue::Number)
            .unwrap_or(CellValue::Null)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }
}

impl From<NaiveTime> for CellValue {
    fn from(v: NaiveTime) -> Self {
        CellValue::Time(v)
    }
}

impl From<HexColor> for CellValue {
    fn from(v: HexColor) -> Self {
        CellValue::Color(v)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(v: serde_json::Value) -> Self {
        CellValue::from_json(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_is_structural() {
        assert_eq!(CellValue::from_json(json!(null)), CellValue::Null);
        assert_eq!(CellValue::from_json(json!(true)), CellValue::Bool(true));
        assert_eq!(CellValue::from_json(json!("2024-01-02")), CellValue::from("2024-01-02"));
        assert_eq!(CellValue::from_json(json!(12)), CellValue::from(12i64));
        assert_eq!(CellValue::from_json(json!([1, 2])), CellValue::Json(json!([1, 2])));
    }

    #[test]
    fn test_serialize_typed_values() {
        let date = CellValue::from(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        let time = CellValue::from(NaiveTime::from_hms_opt(7, 5, 0).unwrap());
        let color = CellValue::from(HexColor::normalize("abc").unwrap());

        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-03-09\"");
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"07:05:00\"");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#aabbcc\"");
        assert_eq!(date.to_json(), json!("2024-03-09"));
    }

    #[test]
    fn test_is_blank() {
        assert!(CellValue::Null.is_blank());
        assert!(CellValue::from("").is_blank());
        assert!(!CellValue::from(" ").is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn test_typed_accessors() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let time = NaiveTime::from_hms_opt(7, 5, 0).unwrap();

        assert_eq!(CellValue::Bool(true).as_bool(), Some(true));
        assert_eq!(CellValue::from(2.5).as_f64(), Some(2.5));
        assert_eq!(CellValue::from(3i64).as_f64(), Some(3.0));
        assert_eq!(CellValue::from(date).as_date(), Some(date));
        assert_eq!(CellValue::from(time).as_time(), Some(time));

        let text = CellValue::from("2024-03-09");
        assert_eq!(text.as_bool(), None);
        assert_eq!(text.as_f64(), None);
        assert_eq!(text.as_date(), None);
        assert_eq!(text.as_time(), None);
    }

    #[test]
    fn test_nan_is_null() {
        assert_eq!(CellValue::from(f64::NAN), CellValue::Null);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(CellValue::Bool(false).to_text(), "");
        assert_eq!(CellValue::from(1.5).to_text(), "1.5");
        assert_eq!(CellValue::Json(json!({"a": 1})).to_text(), "{\"a\":1}");
    }
}
