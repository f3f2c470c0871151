//! Meta keywords extraction.
//!
//! Finds `<meta name="keywords" content="...">` below an element and turns
//! its content into a normalized keyword list.

use crate::dom::{self, NodeRef};
use crate::patterns::KEYWORD_DELIMITER;
use crate::tokenizer;

/// Extract the keyword list declared by a `<meta name="keywords">` below `element`.
///
/// Empty fragments (from `"a, b"` style separators) are dropped. Returns an
/// empty list when there is no such meta tag or its content has no keywords.
#[must_use]
pub fn extract(element: &NodeRef) -> Vec<String> {
    extract_with(element, false)
}

/// Like [`extract`], optionally keeping fragments that normalize to `""`.
#[must_use]
pub fn extract_with(element: &NodeRef, keep_empty: bool) -> Vec<String> {
    let Some(meta) = keywords_meta(element) else {
        return Vec::new();
    };

    let content = dom::get_attribute(&meta, "content").unwrap_or_default();
    parse_keyword_content(&content, keep_empty)
}

/// Split a keywords `content` value on `;`, `,` or a single space and
/// normalize each fragment the same way visible words are normalized.
///
/// Order and duplicates are preserved. A content value with no non-empty
/// fragment yields an empty list even when `keep_empty` is set.
///
/// # Example
///
/// ```rust
/// use keyword_frequency::keywords::parse_keyword_content;
///
/// assert_eq!(parse_keyword_content("a, b c", false), vec!["a", "b", "c"]);
/// assert_eq!(parse_keyword_content("a, b c", true), vec!["a", "", "b", "c"]);
/// ```
#[must_use]
pub fn parse_keyword_content(content: &str, keep_empty: bool) -> Vec<String> {
    let keywords: Vec<String> = KEYWORD_DELIMITER
        .split(content)
        .map(tokenizer::normalize)
        .filter(|k| keep_empty || !k.is_empty())
        .collect();

    if keywords.iter().all(String::is_empty) {
        return Vec::new();
    }
    keywords
}

/// First descendant `<meta>` whose `name` attribute is exactly `keywords`.
fn keywords_meta<'a>(element: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    dom::find_descendants(element, "meta")
        .into_iter()
        .find(|meta| dom::get_attribute(meta, "name").as_deref() == Some("keywords"))
}
