//! Markdown parsing: document tree construction and link discovery.

mod links;
mod tree;

pub use links::extract_links;
pub use tree::{Document, Node, parse_document, plain_text};
