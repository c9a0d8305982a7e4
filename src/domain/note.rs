//! Note struct representing one fully loaded markdown note.

use crate::domain::LinkEntry;
use crate::markdown::Document;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// The complete collection produced by one directory load, keyed by the
/// full path of each note's source file.
///
/// Keys are unique by construction (a directory cannot hold two entries
/// with the same name) and iteration order carries no meaning.
pub type NoteCollection = HashMap<PathBuf, Note>;

/// A fully loaded note.
///
/// A note is constructed once, from a single read of its source file, and
/// is immutable thereafter. It carries:
///
/// - `title`: the resolved display title (never empty),
/// - `links`: outgoing references in document order, duplicates kept,
/// - `raw_contents`: the decoded source text, verbatim,
/// - `document`: the parse tree of `raw_contents`, so downstream
///   consumers never need to re-parse.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use sett::domain::Note;
///
/// let note = Note::from_text("# Welcome\nBody text", Path::new("notes.md"));
/// assert_eq!(note.title(), "Welcome");
/// assert!(note.links().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    title: String,
    links: Vec<LinkEntry>,
    raw_contents: String,
    document: Document,
}

impl Note {
    /// Builds a note from already-decoded source text.
    ///
    /// Parses the text, resolves the title against the tree and the file
    /// path, and extracts the outgoing links. This is the only
    /// constructor; no partially built note exists.
    pub fn from_text(text: impl Into<String>, path: &std::path::Path) -> Self {
        let raw_contents = text.into();
        let document = crate::markdown::parse_document(&raw_contents);
        let title = crate::title::resolve_title(&document, path);
        let links = crate::markdown::extract_links(&document);
        Self {
            title,
            links,
            raw_contents,
            document,
        }
    }

    /// Returns the note's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the outgoing links in document order.
    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    /// Returns the note's source text.
    pub fn raw_contents(&self) -> &str {
        &self.raw_contents
    }

    /// Returns the parsed document tree.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} links)", self.title, self.links.len())
    }
}
