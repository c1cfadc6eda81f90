//! Cell type enumeration

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;

/// The declared type of a column's cells.
///
/// The type drives both normalization and validation. Adding a type means
/// extending this enum and the two matches in [`crate::normalize`] and
/// [`crate::validate`].
///
/// # Wire names
///
/// | Variant | Wire name | Label |
/// |---------|-----------|-------|
/// | `Checkbox` | `checkbox` | Checkbox |
/// | `Color` | `color` | Color |
/// | `Date` | `date` | Date |
/// | `Select` | `select` | Dropdown |
/// | `Email` | `email` | Email |
/// | `Lightswitch` | `lightswitch` | Lightswitch |
/// | `Multiline` | `multiline` | Multi-line text |
/// | `Number` | `number` | Number |
/// | `Singleline` | `singleline` | Single-line text |
/// | `Time` | `time` | Time |
/// | `Url` | `url` | URL |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Checkbox,
    Color,
    Date,
    Select,
    Email,
    Lightswitch,
    Multiline,
    Number,
    #[default]
    Singleline,
    Time,
    Url,
}

impl CellType {
    /// Every cell type, in the order the host lists them.
    pub const ALL: [CellType; 11] = [
        CellType::Checkbox,
        CellType::Color,
        CellType::Date,
        CellType::Select,
        CellType::Email,
        CellType::Lightswitch,
        CellType::Multiline,
        CellType::Number,
        CellType::Singleline,
        CellType::Time,
        CellType::Url,
    ];

    /// Returns the wire name used in stored and submitted values.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Checkbox => "checkbox",
            CellType::Color => "color",
            CellType::Date => "date",
            CellType::Select => "select",
            CellType::Email => "email",
            CellType::Lightswitch => "lightswitch",
            CellType::Multiline => "multiline",
            CellType::Number => "number",
            CellType::Singleline => "singleline",
            CellType::Time => "time",
            CellType::Url => "url",
        }
    }

    /// Returns the human-readable label shown in the settings UI.
    pub fn label(&self) -> &'static str {
        match self {
            CellType::Checkbox => "Checkbox",
            CellType::Color => "Color",
            CellType::Date => "Date",
            CellType::Select => "Dropdown",
            CellType::Email => "Email",
            CellType::Lightswitch => "Lightswitch",
            CellType::Multiline => "Multi-line text",
            CellType::Number => "Number",
            CellType::Singleline => "Single-line text",
            CellType::Time => "Time",
            CellType::Url => "URL",
        }
    }

    /// Returns `true` for the free-text types that carry emoji shortcodes.
    pub fn is_text(&self) -> bool {
        matches!(self, CellType::Singleline | CellType::Multiline)
    }

    /// Returns `true` for the date and time types.
    pub fn is_temporal(&self) -> bool {
        matches!(self, CellType::Date | CellType::Time)
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellType {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TableError::UnknownCellType(s.to_string()))
    }
}
