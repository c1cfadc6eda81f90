//! Per-type cell normalization

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use super::datetime::parse_moment;
use crate::emoji::shortcode_to_unicode;
use crate::model::CellType;
use crate::model::CellValue;
use crate::model::types::HexColor;

/// Any line-break sequence: CRLF, LF, CR, VT, FF, NEL, LS, PS.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\x0B\x0C\r\x{85}\x{2028}\x{2029}]").expect("line break pattern is valid")
});

/// Normalizes one cell value for the given column type.
///
/// Never fails: input that cannot be read as the column's type becomes
/// [`CellValue::Null`]. Already-normalized values come back unchanged.
pub fn normalize_cell(cell_type: CellType, value: CellValue) -> CellValue {
    match cell_type {
        CellType::Color => normalize_color(value),
        CellType::Singleline | CellType::Multiline => normalize_text(value),
        CellType::Date => normalize_date(value),
        CellType::Time => normalize_time(value),
        CellType::Checkbox
        | CellType::Lightswitch
        | CellType::Number
        | CellType::Select
        | CellType::Email
        | CellType::Url => value,
    }
}

/// Trims the characters the host trims: space, tab, LF, CR, NUL and VT.
pub(crate) fn trim_cell_text(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

fn normalize_color(value: CellValue) -> CellValue {
    let raw = match value {
        CellValue::Color(color) => return CellValue::Color(color),
        CellValue::Null | CellValue::Bool(false) => return CellValue::Null,
        CellValue::Number(n) if n.as_f64() == Some(0.0) => return CellValue::Null,
        CellValue::Text(s) => s,
        CellValue::Bool(true) | CellValue::Number(_) => value.to_text(),
        other => {
            log::debug!("Dropping {} value in color cell", other.type_name());
            return CellValue::Null;
        }
    };

    HexColor::normalize(&raw).into()
}

fn normalize_text(value: CellValue) -> CellValue {
    let raw = match value {
        CellValue::Null => return CellValue::Null,
        CellValue::Text(s) => s,
        CellValue::Json(_) => {
            log::debug!("Dropping structured value in text cell");
            return CellValue::Null;
        }
        other => other.to_text(),
    };

    let text = shortcode_to_unicode(&raw);
    let text = LINE_BREAK.replace_all(&text, "\n");
    CellValue::Text(trim_cell_text(&text).to_string())
}

fn normalize_date(value: CellValue) -> CellValue {
    if let CellValue::Date(_) = value {
        return value;
    }
    match parse_moment(&value).and_then(|m| m.date) {
        Some(date) => CellValue::Date(date),
        None => {
            log_unparseable("date", &value);
            CellValue::Null
        }
    }
}

fn normalize_time(value: CellValue) -> CellValue {
    if let CellValue::Time(_) = value {
        return value;
    }
    let time = parse_moment(&value)
        .and_then(|m| m.time.or_else(|| m.date.and_then(|_| NaiveTime::from_hms_opt(0, 0, 0))));
    match time {
        Some(time) => CellValue::Time(time),
        None => {
            log_unparseable("time", &value);
            CellValue::Null
        }
    }
}

fn log_unparseable(kind: &str, value: &CellValue) {
    if !value.is_blank() {
        log::debug!("Unparseable {} value {:?}, normalizing to null", kind, value);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn color(raw: &str) -> CellValue {
        normalize_cell(CellType::Color, CellValue::from(raw))
    }

    #[test]
    fn test_color_examples() {
        assert_eq!(color("abc").as_color().map(HexColor::hex), Some("#aabbcc"));
        assert_eq!(color("#ABC").as_color().map(HexColor::hex), Some("#aabbcc"));
        assert_eq!(color(""), CellValue::Null);
        assert_eq!(color("#"), CellValue::Null);
    }

    #[test]
    fn test_color_zero_is_empty() {
        assert_eq!(color("0"), CellValue::Null);
        assert_eq!(normalize_cell(CellType::Color, CellValue::from(0i64)), CellValue::Null);
        assert_eq!(normalize_cell(CellType::Color, CellValue::from(0.0)), CellValue::Null);
        assert_eq!(
            normalize_cell(CellType::Color, CellValue::from(123i64)).as_color().map(HexColor::hex),
            Some("#112233")
        );
    }

    #[test]
    fn test_color_passes_through_canonical() {
        let canonical = CellValue::Color(HexColor::normalize("#123456").unwrap());
        assert_eq!(normalize_cell(CellType::Color, canonical.clone()), canonical);
        assert_eq!(normalize_cell(CellType::Color, CellValue::Null), CellValue::Null);
    }

    #[test]
    fn test_text_trims_and_folds_line_breaks() {
        let value = normalize_cell(CellType::Multiline, CellValue::from("  a\r\nb  "));
        assert_eq!(value, CellValue::from("a\nb"));

        let value = normalize_cell(CellType::Multiline, CellValue::from("a\rb\u{2028}c"));
        assert_eq!(value, CellValue::from("a\nb\nc"));
    }

    #[test]
    fn test_text_decodes_shortcodes() {
        let value = normalize_cell(CellType::Singleline, CellValue::from(" go :rocket: "));
        assert_eq!(value, CellValue::from("go 🚀"));
    }

    #[test]
    fn test_text_null_passes_through() {
        assert_eq!(normalize_cell(CellType::Singleline, CellValue::Null), CellValue::Null);
    }

    #[test]
    fn test_text_keeps_non_breaking_space() {
        let value = normalize_cell(CellType::Singleline, CellValue::from("\u{a0}x\u{a0}"));
        assert_eq!(value, CellValue::from("\u{a0}x\u{a0}"));
    }

    #[test]
    fn test_text_renders_scalars() {
        assert_eq!(
            normalize_cell(CellType::Singleline, CellValue::from(42i64)),
            CellValue::from("42")
        );
        assert_eq!(
            normalize_cell(CellType::Singleline, CellValue::Json(json!(["a"]))),
            CellValue::Null
        );
    }

    #[test]
    fn test_date() {
        let value = normalize_cell(CellType::Date, CellValue::from("2024-02-29"));
        assert_eq!(value, CellValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));

        assert_eq!(normalize_cell(CellType::Date, CellValue::from("garbage")), CellValue::Null);
        assert_eq!(normalize_cell(CellType::Date, CellValue::from("14:30")), CellValue::Null);
    }

    #[test]
    fn test_time() {
        let value = normalize_cell(CellType::Time, CellValue::from("9:05 PM"));
        assert_eq!(value, CellValue::Time(NaiveTime::from_hms_opt(21, 5, 0).unwrap()));

        let value = normalize_cell(CellType::Time, CellValue::from("2024-02-29"));
        assert_eq!(value, CellValue::Time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn test_pass_through_types() {
        for cell_type in [
            CellType::Number,
            CellType::Checkbox,
            CellType::Lightswitch,
            CellType::Select,
            CellType::Email,
            CellType::Url,
        ] {
            let value = CellValue::from("  untouched ");
            assert_eq!(normalize_cell(cell_type, value.clone()), value);
        }
    }

    #[test]
    fn test_idempotent() {
        for (cell_type, raw) in [
            (CellType::Color, "AbC"),
            (CellType::Singleline, " x\r\ny "),
            (CellType::Date, "1/2/2024"),
            (CellType::Time, "14:30"),
        ] {
            let once = normalize_cell(cell_type, CellValue::from(raw));
            let twice = normalize_cell(cell_type, once.clone());
            assert_eq!(once, twice);
        }
    }
}
