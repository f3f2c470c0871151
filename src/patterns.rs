//! Compiled regex patterns.
//!
//! Patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Splits a meta keywords `content` value.
///
/// One match per delimiter character, so `"a, b"` yields `["a", "", "b"]`.
pub static KEYWORD_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";|,| ").expect("KEYWORD_DELIMITER regex"));

/// Extracts the `charset` parameter of a `Content-Type` header value.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("CONTENT_TYPE_CHARSET regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_delimiter_splits_each_occurrence() {
        let parts: Vec<&str> = KEYWORD_DELIMITER.split("a, b;c").collect();
        assert_eq!(parts, vec!["a", "", "b", "c"]);
    }

    #[test]
    fn keyword_delimiter_ignores_tabs_and_newlines() {
        let parts: Vec<&str> = KEYWORD_DELIMITER.split("a\tb\nc").collect();
        assert_eq!(parts, vec!["a\tb\nc"]);
    }

    #[test]
    fn content_type_charset_variants() {
        let caps = CONTENT_TYPE_CHARSET.captures("text/html; charset=ISO-8859-2");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("ISO-8859-2"));

        let caps = CONTENT_TYPE_CHARSET.captures(r#"text/html; Charset="utf-8""#);
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("utf-8"));

        assert!(CONTENT_TYPE_CHARSET.captures("text/html").is_none());
    }
}
