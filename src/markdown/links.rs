//! Link extraction from a parsed document tree.

use crate::domain::LinkEntry;
use crate::markdown::tree::{Node, plain_text};
use crate::markdown::Document;

/// Collects every link in the document, in document order.
///
/// The walk is a deterministic pre-order traversal: entries appear in the
/// order links first appear in the source, duplicates are kept, and no
/// target is validated. A document without links yields an empty vec.
pub fn extract_links(document: &Document) -> Vec<LinkEntry> {
    let mut entries = Vec::new();
    collect(document.children(), &mut entries);
    entries
}

fn collect(nodes: &[Node], entries: &mut Vec<LinkEntry>) {
    for node in nodes {
        if let Node::Link {
            kind,
            target,
            children,
        } = node
        {
            entries.push(LinkEntry::new(*kind, target.clone(), plain_text(children)));
        }
        collect(node.children(), entries);
    }
}
