//! Isolated test environment with temp directory.

use super::{NotesCommand, TestNote};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Adds a test note to the environment and returns its path.
    pub fn add_note(&self, note: &TestNote) -> PathBuf {
        self.write_file(note.filename(), note.contents())
    }

    /// Writes a file to the test environment and returns its path.
    ///
    /// Useful for non-note files and edge-case contents.
    pub fn write_file(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.notes_dir.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new().dir(&self.notes_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
