//! Export error types.

use thiserror::Error;

use crate::infra::FsError;
use crate::store::StoreError;

/// Errors that abort an export invocation.
///
/// Per-image problems never surface here; they degrade inside the
/// rewriter.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested notebook is not in the notebook tree.
    #[error("notebook not found: {id}")]
    NotebookNotFound { id: String },

    /// The requested note does not exist.
    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    /// A filesystem operation failed.
    #[error(transparent)]
    Fs(#[from] FsError),

    /// The note store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
