//! Directory loading: scan, read, and assemble notes into a collection.

use crate::domain::{Note, NoteCollection};
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors during a directory load.
///
/// Any failure aborts the whole load; there is no per-file recovery and
/// no partial collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl LoadError {
    /// Creates an appropriate LoadError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path: path.into() },
            _ => LoadError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    fn from_walkdir(dir: &Path, error: walkdir::Error) -> Self {
        let path = error.path().unwrap_or(dir).to_path_buf();
        match error.into_io_error() {
            Some(source) => LoadError::from_io(&path, source),
            None => LoadError::Io {
                path,
                source: io::Error::other("filesystem loop detected"),
            },
        }
    }
}

/// Scans a directory for note files.
///
/// Only direct entries are considered (no recursion into
/// subdirectories). An entry is a note file when it is a regular file,
/// its name does not start with `.` or `_`, and its name ends in `.md`.
/// Returns full paths.
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the directory doesn't exist,
/// `LoadError::NotADirectory` if the path is not a directory, and an
/// I/O error if the listing itself fails mid-scan.
pub fn scan_notes_directory(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.exists() {
        return Err(LoadError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|e| LoadError::from_walkdir(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') || name.starts_with('_') || !name.ends_with(".md") {
            continue;
        }
        paths.push(entry.into_path());
    }
    Ok(paths)
}

/// Reads and assembles a single note.
///
/// Reads the file's full contents, decodes them, parses the markdown,
/// and builds the [`Note`] with its resolved title and extracted links.
///
/// # Errors
///
/// Returns `LoadError::NotFound` / `PermissionDenied` / `Io` when the
/// read fails and `LoadError::InvalidEncoding` when the contents are
/// not UTF-8 text.
pub fn read_note(path: &Path) -> Result<Note, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::from_io(path, e))?;
    let text = decode_text(bytes, path)?;
    Ok(Note::from_text(text, path))
}

/// Decodes note bytes to text.
///
/// UTF-16 files are rejected with a conversion hint; a leading UTF-8 BOM
/// is stripped so line 0 is the first real content.
fn decode_text(bytes: Vec<u8>, path: &Path) -> Result<String, LoadError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(LoadError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(LoadError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    let text = String::from_utf8(bytes).map_err(|e| LoadError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

/// Loads every note in a directory into a [`NoteCollection`].
///
/// Files are selected by [`scan_notes_directory`], then processed
/// independently: one work unit per file, fanned out across scoped
/// threads and joined before any result is observable. Within a unit the
/// steps are strictly sequential (read, then parse, then title/link
/// resolution); across units there is no ordering at all, which is fine
/// because the output is addressed by key.
///
/// # Errors
///
/// All-or-nothing: if any single file fails to read or decode, the
/// whole load fails and no collection is returned.
pub fn load_notes(dir: &Path) -> Result<NoteCollection, LoadError> {
    let paths = scan_notes_directory(dir)?;

    let results: Vec<Result<Note, LoadError>> = thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || read_note(path)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("note loader thread panicked"))
            .collect()
    });

    let mut collection = NoteCollection::with_capacity(paths.len());
    for (path, result) in paths.into_iter().zip(results) {
        collection.insert(path, result?);
    }
    Ok(collection)
}
