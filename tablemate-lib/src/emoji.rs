//! Emoji shortcode encoding
//!
//! Text cells are stored with emoji replaced by `:shortcode:` so the value
//! survives storage backends limited to 3-byte UTF-8. Reading a value back
//! turns the shortcodes into emoji again.
//!
//! Only emoji whose shortcode maps back to the exact same character sequence
//! are encoded; anything else (skin-tone variants without a shortcode,
//! unqualified presentation forms) is left as it is. This keeps
//! `shortcode_to_unicode(unicode_to_shortcode(s)) == s` for any `s` that does
//! not itself contain shortcode-like `:name:` text.

/// Longest emoji sequence, in chars, that the encoder tries to match.
const MAX_EMOJI_CHARS: usize = 10;

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Replaces literal emoji with their `:shortcode:` form.
///
/// # Example
///
/// ```
/// use tablemate_lib::emoji::unicode_to_shortcode;
///
/// assert_eq!(unicode_to_shortcode("ship it 🚀"), "ship it :rocket:");
/// ```
pub fn unicode_to_shortcode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        // Only keycap sequences start with ASCII.
        let could_start_emoji =
            !c.is_ascii() || chars.get(i + 1).is_some_and(|&(_, next)| next == VARIATION_SELECTOR);
        if !could_start_emoji {
            out.push(c);
            i += 1;
            continue;
        }

        match longest_emoji_at(text, &chars, i) {
            Some((len, emoji)) => {
                let end = byte_end(text, &chars, i + len);
                match encodable_shortcode(emoji, &text[start..end]) {
                    Some(shortcode) => {
                        out.push(':');
                        out.push_str(shortcode);
                        out.push(':');
                    }
                    None => out.push_str(&text[start..end]),
                }
                i += len;
            }
            None => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Replaces `:shortcode:` sequences with the emoji they name.
///
/// Colon-delimited text that is not a known shortcode is kept verbatim.
///
/// # Example
///
/// ```
/// use tablemate_lib::emoji::shortcode_to_unicode;
///
/// assert_eq!(shortcode_to_unicode("ship it :rocket:"), "ship it 🚀");
/// assert_eq!(shortcode_to_unicode("at 10:30"), "at 10:30");
/// ```
pub fn shortcode_to_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(':') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let name_len = after
            .find(|c: char| !is_shortcode_char(c))
            .unwrap_or(after.len());
        let closes = after[name_len..].starts_with(':');

        if name_len > 0 && closes {
            if let Some(emoji) = emojis::get_by_shortcode(&after[..name_len]) {
                out.push_str(emoji.as_str());
                rest = &after[name_len + 1..];
                continue;
            }
        }

        // Not a shortcode: keep this colon and rescan from the next char, so
        // the closing colon can still open a real shortcode.
        out.push(':');
        rest = after;
    }

    out.push_str(rest);
    out
}

fn is_shortcode_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-')
}

fn byte_end(text: &str, chars: &[(usize, char)], index: usize) -> usize {
    chars.get(index).map_or(text.len(), |&(offset, _)| offset)
}

/// Finds the longest emoji starting at char `index`, returning its length in
/// chars.
fn longest_emoji_at(
    text: &str,
    chars: &[(usize, char)],
    index: usize,
) -> Option<(usize, &'static emojis::Emoji)> {
    let start = chars[index].0;
    let max = MAX_EMOJI_CHARS.min(chars.len() - index);

    (1..=max).rev().find_map(|len| {
        let end = byte_end(text, chars, index + len);
        emojis::get(&text[start..end]).map(|emoji| (len, emoji))
    })
}

/// Returns the shortcode to emit for `emoji` found as `matched`, if the
/// shortcode decodes back to exactly `matched`.
fn encodable_shortcode(emoji: &'static emojis::Emoji, matched: &str) -> Option<&'static str> {
    if emoji.as_str() != matched {
        return None;
    }
    let shortcode = emoji.shortcode()?;
    let decoded = emojis::get_by_shortcode(shortcode)?;
    (decoded.as_str() == matched).then_some(shortcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_plain_text_unchanged() {
        assert_eq!(unicode_to_shortcode("hello, world: 10:30"), "hello, world: 10:30");
        assert_eq!(unicode_to_shortcode("naïve café"), "naïve café");
    }

    #[test]
    fn test_encode_emoji() {
        let encoded = unicode_to_shortcode("🚀 launch");
        assert_eq!(encoded, ":rocket: launch");
    }

    #[test]
    fn test_decode_known_shortcode() {
        assert_eq!(shortcode_to_unicode(":rocket:"), "🚀");
    }

    #[test]
    fn test_decode_unknown_shortcode_kept() {
        assert_eq!(shortcode_to_unicode(":definitely_not_an_emoji:"), ":definitely_not_an_emoji:");
        assert_eq!(shortcode_to_unicode("a::b"), "a::b");
        assert_eq!(shortcode_to_unicode("trailing:"), "trailing:");
    }

    #[test]
    fn test_decode_after_false_start() {
        assert_eq!(shortcode_to_unicode("ab:c:rocket:"), "ab:c🚀");
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "plain",
            "🚀🚀 double",
            "mixed 🎉 text ❤️ here",
            "colon: then 🚀",
            "👍🏽 toned",
            "line\nbreak 😀",
        ] {
            assert_eq!(shortcode_to_unicode(&unicode_to_shortcode(text)), text, "{text}");
        }
    }

    #[test]
    fn test_encoded_is_ascii_for_common_emoji() {
        assert!(unicode_to_shortcode("🎉😀🚀").is_ascii());
    }
}
