//! Title resolution for notes.
//!
//! A note's display title comes from the rank-1 heading that opens the
//! document, or from its filename when no such heading exists.

use crate::markdown::{Document, Node, plain_text};
use std::path::Path;

/// Resolves the display title for a note.
///
/// Searches the tree (document order) for the first rank-1 heading. The
/// heading is used only when it serves as the page header, meaning it
/// starts on line 0 of the source; a rank-1 heading appearing after any
/// other content does not qualify, and rank-2+ headings are never
/// considered. A qualifying heading yields the plain-text rendering of
/// its inline content with trailing whitespace trimmed.
///
/// In every other case the title is derived from the filename via
/// [`wiki_page_name`]. That includes the degenerate case of a qualifying
/// heading whose text renders empty, so the result is always non-empty
/// for any non-empty filename.
///
/// Line numbers are 0-based over the decoded text: leading blank lines
/// or front-matter push a heading past line 0 and force the filename
/// fallback.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use sett::markdown::parse_document;
/// use sett::title::resolve_title;
///
/// let doc = parse_document("# Welcome\nBody text");
/// assert_eq!(resolve_title(&doc, Path::new("notes.md")), "Welcome");
///
/// let doc = parse_document("Intro line\n\n# Welcome");
/// assert_eq!(resolve_title(&doc, Path::new("notes.md")), "notes");
/// ```
pub fn resolve_title(document: &Document, path: &Path) -> String {
    let heading = document.find(|n| matches!(n, Node::Heading { level: 1, .. }));

    if let Some(Node::Heading { line, children, .. }) = heading
        && serves_as_page_header(*line)
    {
        let title = plain_text(children).trim_end().to_string();
        if !title.is_empty() {
            return title;
        }
    }

    wiki_page_name(path)
}

/// A heading serves as the page header only when it is the very first
/// content of the document.
fn serves_as_page_header(line: usize) -> bool {
    line == 0
}

/// Derives a title from a filename using the wiki page naming scheme:
/// the last path segment with its extension (text after the last `.`)
/// stripped and every hyphen replaced by a space.
///
/// This is the naming-scheme adapter; swapping conventions for a
/// different wiki platform only touches this function.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use sett::title::wiki_page_name;
///
/// assert_eq!(wiki_page_name(Path::new("notes/hello-world.md")), "hello world");
/// assert_eq!(wiki_page_name(Path::new("notes.md")), "notes");
/// ```
pub fn wiki_page_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.replace('-', " ")
}
