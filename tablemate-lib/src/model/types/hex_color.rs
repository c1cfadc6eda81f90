//! Hex colour cell values

use std::fmt;
use std::sync::LazyLock;

use color::AlphaColor;
use color::Srgb;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

/// A colour cell value in canonical `#rrggbb` form.
///
/// Normalization only canonicalizes the notation (lowercase, leading `#`,
/// shorthand expansion); it does not check the digits. A `HexColor` can
/// therefore hold a malformed value such as `#zzzzzz`, which validation
/// rejects and the RGB accessors report as `None`.
///
/// # Example
///
/// ```
/// use tablemate_lib::model::types::HexColor;
///
/// let color = HexColor::normalize("ABC").unwrap();
/// assert_eq!(color.hex(), "#aabbcc");
/// assert_eq!(color.rgb(), Some((0xaa, 0xbb, 0xcc)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Canonicalizes raw colour input.
    ///
    /// Returns `None` for the empty string, `"0"` and the bare `#`
    /// placeholder the colour picker submits when nothing was chosen.
    pub fn normalize(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw == "0" || raw == "#" {
            return None;
        }

        let mut hex = raw.to_lowercase();
        if !hex.starts_with('#') {
            hex.insert(0, '#');
        }

        let digits: Vec<char> = hex.chars().skip(1).collect();
        if digits.len() == 3 {
            hex = std::iter::once('#')
                .chain(digits.iter().flat_map(|&c| [c, c]))
                .collect();
        }

        Some(Self(hex))
    }

    /// Returns the `#rrggbb` string.
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `s` is `#` followed by exactly six hex digits.
    pub fn is_hex_color(s: &str) -> bool {
        HEX_COLOR.is_match(s)
    }

    /// Returns `true` if the value is `#` followed by six hex digits.
    pub fn is_well_formed(&self) -> bool {
        Self::is_hex_color(&self.0)
    }

    /// Returns the red, green and blue components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        if !self.is_well_formed() {
            return None;
        }
        let parsed = color::parse_color(&self.0).ok()?;
        let srgb: AlphaColor<Srgb> = parsed.to_alpha_color();
        let [r, g, b, _] = srgb.components;
        Some((channel(r), channel(g), channel(b)))
    }

    /// Returns the red component.
    pub fn red(&self) -> Option<u8> {
        self.rgb().map(|(r, _, _)| r)
    }

    /// Returns the green component.
    pub fn green(&self) -> Option<u8> {
        self.rgb().map(|(_, g, _)| g)
    }

    /// Returns the blue component.
    pub fn blue(&self) -> Option<u8> {
        self.rgb().map(|(_, _, b)| b)
    }

    /// Relative luma in `0.0..=1.0` (Rec. 709 weights).
    pub fn luma(&self) -> Option<f32> {
        let (r, g, b) = self.rgb()?;
        Some((0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0)
    }

    /// Consumes the colour and returns the hex string.
    pub fn into_string(self) -> String {
        self.0
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_shorthand() {
        assert_eq!(HexColor::normalize("abc").unwrap().hex(), "#aabbcc");
        assert_eq!(HexColor::normalize("#ABC").unwrap().hex(), "#aabbcc");
    }

    #[test]
    fn test_normalize_full_length() {
        assert_eq!(HexColor::normalize("FF8800").unwrap().hex(), "#ff8800");
        assert_eq!(HexColor::normalize("#ff8800").unwrap().hex(), "#ff8800");
    }

    #[test]
    fn test_normalize_placeholders() {
        assert!(HexColor::normalize("").is_none());
        assert!(HexColor::normalize("#").is_none());
        assert!(HexColor::normalize("0").is_none());
        assert_eq!(HexColor::normalize("00").map(HexColor::into_string).as_deref(), Some("#00"));
    }

    #[test]
    fn test_malformed_keeps_notation() {
        let color = HexColor::normalize("zzz").unwrap();
        assert_eq!(color.hex(), "#zzzzzz");
        assert!(!color.is_well_formed());
        assert_eq!(color.rgb(), None);
    }

    #[test]
    fn test_components() {
        let color = HexColor::normalize("#ff8000").unwrap();
        assert_eq!(color.red(), Some(255));
        assert_eq!(color.green(), Some(128));
        assert_eq!(color.blue(), Some(0));
    }

    #[test]
    fn test_luma_bounds() {
        let white = HexColor::normalize("fff").unwrap();
        let black = HexColor::normalize("000").unwrap();
        assert!((white.luma().unwrap() - 1.0).abs() < 1e-3);
        assert!(black.luma().unwrap().abs() < 1e-3);
    }
}
