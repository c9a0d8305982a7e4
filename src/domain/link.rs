//! Link entry type representing one outgoing reference from a note.

use serde::Serialize;
use std::fmt;

/// The syntactic form a link was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// `[text](target)`
    Inline,
    /// `[text][label]`
    Reference,
    /// `[label][]`
    Collapsed,
    /// `[label]`
    Shortcut,
    /// `<https://example.com>`
    Autolink,
    /// `<user@example.com>`
    Email,
    /// `[[target]]` or `[[target|text]]`
    Wiki,
}

/// One discovered reference from a note to another note or resource.
///
/// Entries are value objects: they are collected in document order,
/// preserved unmodified, and never deduplicated or validated against any
/// target's existence.
///
/// # Examples
///
/// ```
/// use sett::domain::{LinkEntry, LinkKind};
///
/// let entry = LinkEntry::new(LinkKind::Wiki, "other-note", "other note");
/// assert_eq!(entry.target(), "other-note");
/// assert_eq!(entry.text(), "other note");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    kind: LinkKind,
    target: String,
    text: String,
}

impl LinkEntry {
    /// Creates a new link entry.
    pub fn new(kind: LinkKind, target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            text: text.into(),
        }
    }

    /// Returns the syntactic form of the link.
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// Returns the link target as written in the source.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the link's display text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LinkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() || self.text == self.target {
            write!(f, "{}", self.target)
        } else {
            write!(f, "{} ({})", self.target, self.text)
        }
    }
}
