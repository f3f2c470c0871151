//! DOM Operations Adapter
//!
//! Small set of tree operations the scanner needs, mapped onto the
//! `dom_query` crate. Element-level helpers take a `NodeRef` because the
//! scanner walks individual nodes and detaches them as it goes.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string (a whole page or any fragment of one) into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

// === Traversal ===

/// Every element of the document in pre-order (document order).
///
/// The list is materialized up front, so detaching a node later does not
/// drop its descendants from the walk.
#[must_use]
pub fn elements(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.select("*").nodes().to_vec()
}

/// All descendant elements of `node` with the given tag name, in document order.
#[must_use]
pub fn find_descendants<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(|n| n.is_element() && n.node_name().is_some_and(|name| &*name == tag))
        .collect()
}

/// Whether `node` has at least one descendant element with the given tag name.
#[must_use]
pub fn has_descendant(node: &NodeRef, tag: &str) -> bool {
    node.descendants()
        .into_iter()
        .any(|n| n.is_element() && n.node_name().is_some_and(|name| &*name == tag))
}

// === Text Content ===

/// Text of the node's immediate text children, joined with single spaces.
///
/// Text inside child elements is not included.
#[must_use]
pub fn direct_text(node: &NodeRef) -> String {
    let parts: Vec<StrTendril> = node
        .children()
        .into_iter()
        .filter(NodeRef::is_text)
        .map(|child| child.text())
        .collect();

    match parts.len() {
        0 => String::new(),
        1 => parts[0].to_string(),
        _ => parts.iter().map(|p| &**p).collect::<Vec<&str>>().join(" "),
    }
}

// === Tree Manipulation ===

/// Detach a node (and its subtree) from its parent.
///
/// The subtree itself stays intact and can still be inspected.
#[inline]
pub fn excise(node: &NodeRef) {
    node.remove_from_parent();
}
