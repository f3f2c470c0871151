//! Tag visibility classification.
//!
//! Text directly inside a tag counts as visible unless the tag name is on a
//! fixed denylist. The list is kept verbatim, including `id` and `class`,
//! which are attribute names and never match an element.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tag names whose direct text is not counted.
pub static NON_VISIBLE_TAGS: [&str; 35] = [
    "th", "td", "strong", "noscript", "id", "iframe", "label", "br", "class", "base", "span",
    "title", "button", "script", "style", "ul", "small", "div", "meta", "nav", "time", "tbody",
    "tr", "body", "img", "code", "form", "header", "pre", "input", "section", "em", "link",
    "fieldset", "blockquote",
];

/// `NON_VISIBLE_TAGS` as a `HashSet`
pub static NON_VISIBLE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NON_VISIBLE_TAGS.into_iter().collect());

/// Returns `true` when text directly inside `tag_name` counts as visible.
///
/// Matching is exact; dom_query reports HTML tag names in lowercase.
#[inline]
#[must_use]
pub fn is_visible(tag_name: &str) -> bool {
    !NON_VISIBLE_TAG_SET.contains(tag_name)
}

/// Owned copy of the default denylist, used to seed `Options`.
#[must_use]
pub fn default_non_visible_tags() -> HashSet<String> {
    NON_VISIBLE_TAGS.iter().map(|t| (*t).to_string()).collect()
}
