//! Date and time parsing for `date` and `time` cells
//!
//! Accepts the shapes the host date and time pickers submit, stored
//! `YYYY-MM-DD` / `HH:MM:SS` strings, ISO-8601 date-times and Unix
//! timestamps. Offsets are not converted: `2024-01-02T23:30:00-05:00` is the
//! 2nd of January at 23:30.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;

use crate::model::CellValue;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d.%m.%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M %p", "%I:%M%p", "%I:%M:%S %p"];

/// The date and/or time read from a raw cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Moment {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl Moment {
    fn date_time(dt: NaiveDateTime) -> Self {
        Self {
            date: Some(dt.date()),
            time: Some(dt.time()),
        }
    }

    fn date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            time: None,
        }
    }

    fn time(time: NaiveTime) -> Self {
        Self {
            date: None,
            time: Some(time),
        }
    }

    fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }
}

/// Reads a date and/or time from a raw cell value.
pub fn parse_moment(value: &CellValue) -> Option<Moment> {
    match value {
        CellValue::Date(d) => Some(Moment::date(*d)),
        CellValue::Time(t) => Some(Moment::time(*t)),
        CellValue::Text(s) => parse_str(s),
        CellValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .and_then(from_timestamp),
        CellValue::Json(serde_json::Value::Object(obj)) => {
            let field = |key: &str| obj.get(key).and_then(serde_json::Value::as_str);
            let moment = Moment {
                date: field("date").and_then(parse_str).and_then(|m| m.date),
                time: field("time").and_then(parse_str).and_then(|m| m.time),
            };
            (!moment.is_empty()).then_some(moment)
        }
        _ => None,
    }
}

/// Parses a date, time or date-time string.
pub fn parse_str(raw: &str) -> Option<Moment> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if is_timestamp(s) {
        return s.parse().ok().and_then(from_timestamp);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Moment::date_time(dt.naive_local()));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(Moment::date_time)
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(Moment::date)
        })
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
                .map(Moment::time)
        })
}

fn is_timestamp(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn from_timestamp(secs: i64) -> Option<Moment> {
    DateTime::from_timestamp(secs, 0).map(|dt| Moment::date_time(dt.naive_utc()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_str("2024-01-02"), Some(Moment::date(ymd(2024, 1, 2))));
    }

    #[test]
    fn test_picker_date() {
        assert_eq!(parse_str("1/2/2024").unwrap().date, Some(ymd(2024, 1, 2)));
    }

    #[test]
    fn test_rfc3339_keeps_local_parts() {
        let moment = parse_str("2024-01-02T23:30:00-05:00").unwrap();
        assert_eq!(moment.date, Some(ymd(2024, 1, 2)));
        assert_eq!(moment.time, Some(hms(23, 30, 0)));
    }

    #[test]
    fn test_times() {
        assert_eq!(parse_str("14:30").unwrap().time, Some(hms(14, 30, 0)));
        assert_eq!(parse_str("14:30:15").unwrap().time, Some(hms(14, 30, 15)));
        assert_eq!(parse_str("2:30 PM").unwrap().time, Some(hms(14, 30, 0)));
    }

    #[test]
    fn test_timestamp() {
        let moment = parse_str("86400").unwrap();
        assert_eq!(moment.date, Some(ymd(1970, 1, 2)));
        assert_eq!(moment.time, Some(hms(0, 0, 0)));

        let moment = parse_moment(&CellValue::from(0i64)).unwrap();
        assert_eq!(moment.date, Some(ymd(1970, 1, 1)));
    }

    #[test]
    fn test_picker_object() {
        let value = CellValue::Json(json!({"date": "3/4/2023", "time": "9:15 AM", "timezone": "UTC"}));
        let moment = parse_moment(&value).unwrap();

        assert_eq!(moment.date, Some(ymd(2023, 3, 4)));
        assert_eq!(moment.time, Some(hms(9, 15, 0)));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_str("next tuesday-ish"), None);
        assert_eq!(parse_str(""), None);
        assert_eq!(parse_str("2024-13-45"), None);
        assert_eq!(parse_moment(&CellValue::Json(json!({"timezone": "UTC"}))), None);
        assert_eq!(parse_moment(&CellValue::Bool(true)), None);
    }
}
