//! NoteStore trait and error types.

use crate::domain::{Note, Notebook};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the note library.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The library database does not exist.
    #[error("library not found: {path}")]
    LibraryNotFound { path: PathBuf },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be interpreted.
    #[error("invalid data in library: {0}")]
    InvalidData(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to notebooks and notes.
///
/// Exports query the store on demand; nothing here mutates notes.
pub trait NoteStore {
    /// Returns the notebook forest: top-level notebooks in tree order,
    /// each carrying its ordered descendants.
    fn notebooks(&self) -> StoreResult<Vec<Notebook>>;

    /// Returns every note owned directly by a notebook, unpaginated.
    fn notes_in_notebook(&self, notebook_id: &str) -> StoreResult<Vec<Note>>;

    /// Loads a single note, `None` if it does not exist.
    fn load_note(&self, id: &str) -> StoreResult<Option<Note>>;
}

/// A binary attachment stored in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub id: String,
    pub name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}
