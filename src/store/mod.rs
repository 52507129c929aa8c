//! Note library access: the NoteStore trait and its SQLite implementation

mod extractor;
mod repository;
mod schema;
mod sqlite;
mod transaction;

pub use extractor::LibraryImageExtractor;
pub use repository::{NoteStore, StoreError, StoreResult, StoredFile};
pub use schema::{REQUIRED_TABLES, SCHEMA_VERSION, create_schema, missing_table};
pub use sqlite::SqliteStore;
pub use transaction::Transaction;
