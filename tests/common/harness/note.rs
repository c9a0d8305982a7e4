//! Programmatic note file creation for tests.

#![allow(dead_code)]

/// A note file to be written into a test environment.
pub struct TestNote {
    filename: String,
    contents: String,
}

impl TestNote {
    /// A note whose first line is a rank-1 heading, so its resolved
    /// title is the heading text.
    pub fn with_heading(filename: &str, title: &str, body: &str) -> Self {
        Self {
            filename: filename.to_string(),
            contents: format!("# {title}\n\n{body}"),
        }
    }

    /// A note with raw contents written verbatim.
    pub fn raw(filename: &str, contents: &str) -> Self {
        Self {
            filename: filename.to_string(),
            contents: contents.to_string(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}
