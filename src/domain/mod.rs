//! Core types: Note, LinkEntry, NoteCollection

mod link;
mod note;

pub use link::{LinkEntry, LinkKind};
pub use note::{Note, NoteCollection};
