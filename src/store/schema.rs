//! SQLite schema for the note library.

use rusqlite::Connection;

/// Current library schema version.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the library schema.
///
/// `notes.created` and `notes.modified` hold RFC 3339 text. Offsets and
/// fractional seconds vary between writers, so compare them through
/// `julianday()` rather than as strings.
///
/// Idempotent: calling it against an existing library leaves data intact.
///
/// # Tables Created
/// - `books` - Notebooks with parent pointers and sibling position
/// - `notes` - Note content and timestamps (RFC 3339 text)
/// - `files` - Binary attachments referenced from note bodies
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS books (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            parent_id TEXT,
            position INTEGER NOT NULL DEFAULT 0
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id TEXT PRIMARY KEY,
            book_id TEXT,
            title TEXT NOT NULL DEFAULT '',
            body TEXT,
            created TEXT NOT NULL,
            modified TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_notes_book ON notes(book_id);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS files (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            content_type TEXT,
            data BLOB NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}

/// Tables an export reads from.
pub const REQUIRED_TABLES: [&str; 3] = ["books", "notes", "files"];

/// Returns the first required table absent from the library, if any.
///
/// Only reads `sqlite_master`, so it is safe on a read-only connection.
pub fn missing_table(conn: &Connection) -> rusqlite::Result<Option<&'static str>> {
    let mut stmt = conn.prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?")?;
    for table in REQUIRED_TABLES {
        if !stmt.exists([table])? {
            return Ok(Some(table));
        }
    }
    Ok(None)
}
