//! Command handlers for the CLI.

mod books;
mod completions;
mod export;

use std::path::Path;

use anyhow::{Context, Result};

use crate::store::SqliteStore;

// Re-export public items
pub use books::{collect_listings, handle_books};
pub use completions::handle_completions;
pub use export::{handle_all, handle_book, handle_note, handle_notes};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens an existing library database.
pub(crate) fn open_library(library: &Path) -> Result<SqliteStore> {
    SqliteStore::open(library)
        .with_context(|| format!("failed to open library: {}", library.display()))
}
