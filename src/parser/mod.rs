//! Source parsers.
//!
//! Each parser degrades instead of failing: malformed or partial records are
//! logged and whatever could be recovered is returned.

pub mod hebrew;
pub mod markup;
pub mod spanish;
pub mod structured;

pub use hebrew::parse_hebrew_markup;
pub use markup::Document;
pub use spanish::{parse_spanish_markup, SpanishBook, SpanishVerse, SpanishWord};
pub use structured::parse_structured_json;

/// Parse the leading run of ASCII digits, so `"3a"` reads as 3.
pub(crate) fn leading_number(s: &str) -> Option<u32> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("12"), Some(12));
        assert_eq!(leading_number(" 3a"), Some(3));
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number(""), None);
    }
}
