//! SQLite-backed note library.

use crate::domain::{Note, Notebook, NotebookRow, build_tree};
use crate::store::transaction::Transaction;
use crate::store::{NoteStore, StoreError, StoreResult, StoredFile, create_schema, missing_table};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OpenFlags, OptionalExtension, Params, Row};
use std::fs;
use std::path::Path;

/// SQLite-backed note library.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    // ===========================================
    // Connections
    // ===========================================

    /// Opens an in-memory library with the schema applied.
    ///
    /// This is useful for testing and throwaway libraries.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens an existing library read-only.
    ///
    /// The file is never written: no schema is applied and every writer
    /// on the returned store fails with a database error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LibraryNotFound` if no file exists at `path`,
    /// and `StoreError::InvalidData` if a table the export reads is absent.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::LibraryNotFound {
                path: path.to_path_buf(),
            });
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        if let Some(table) = missing_table(&conn)? {
            return Err(StoreError::InvalidData(format!(
                "library is missing table '{}'",
                table
            )));
        }
        Ok(Self { conn })
    }

    /// Opens or creates a library at the given path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn create(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begins a new transaction.
    ///
    /// The transaction will automatically rollback on drop unless `commit()` is called.
    pub fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        self.conn.execute_batch("BEGIN")?;
        Ok(Transaction::new(&self.conn))
    }

    // ===========================================
    // Writers (library seeding)
    // ===========================================

    /// Inserts or replaces a notebook row.
    pub fn insert_book(&self, row: &NotebookRow) -> StoreResult<()> {
        self.conn.execute(INSERT_BOOK, book_params(row))?;
        Ok(())
    }

    /// Inserts or replaces a note.
    pub fn insert_note(&self, note: &Note) -> StoreResult<()> {
        self.conn.execute(INSERT_NOTE, note_params(note))?;
        Ok(())
    }

    /// Inserts or replaces a binary attachment.
    pub fn insert_file(&self, file: &StoredFile) -> StoreResult<()> {
        self.conn.execute(INSERT_FILE, file_params(file))?;
        Ok(())
    }

    /// Writes a batch of rows in one transaction.
    ///
    /// Either every row lands or none does.
    pub fn import(
        &mut self,
        books: &[NotebookRow],
        notes: &[Note],
        files: &[StoredFile],
    ) -> StoreResult<()> {
        let tx = self.transaction()?;
        for row in books {
            tx.execute(INSERT_BOOK, book_params(row))?;
        }
        for note in notes {
            tx.execute(INSERT_NOTE, note_params(note))?;
        }
        for file in files {
            tx.execute(INSERT_FILE, file_params(file))?;
        }
        tx.commit()?;

        tracing::debug!(
            books = books.len(),
            notes = notes.len(),
            files = files.len(),
            "imported library rows"
        );
        Ok(())
    }

    // ===========================================
    // Readers
    // ===========================================

    /// Loads a binary attachment by id.
    pub fn load_file(&self, id: &str) -> StoreResult<Option<StoredFile>> {
        let file = self
            .conn
            .query_row(
                "SELECT id, name, content_type, data FROM files WHERE id = ?",
                [id],
                |row| {
                    Ok(StoredFile {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        content_type: row.get(2)?,
                        data: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(file)
    }

    fn notebook_rows(&self) -> StoreResult<Vec<NotebookRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, parent_id, position FROM books ORDER BY rowid")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(NotebookRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    parent_id: row.get(2)?,
                    position: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl NoteStore for SqliteStore {
    fn notebooks(&self) -> StoreResult<Vec<Notebook>> {
        Ok(build_tree(self.notebook_rows()?))
    }

    fn notes_in_notebook(&self, notebook_id: &str) -> StoreResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, book_id, title, body, created, modified
             FROM notes WHERE book_id = ?
             ORDER BY julianday(modified) DESC, id",
        )?;
        let raw = stmt
            .query_map([notebook_id], RawNote::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        raw.into_iter().map(RawNote::into_note).collect()
    }

    fn load_note(&self, id: &str) -> StoreResult<Option<Note>> {
        let raw = self
            .conn
            .query_row(
                "SELECT id, book_id, title, body, created, modified FROM notes WHERE id = ?",
                [id],
                RawNote::from_row,
            )
            .optional()?;
        raw.map(RawNote::into_note).transpose()
    }
}

/// A notes row before timestamp parsing.
struct RawNote {
    id: String,
    book_id: Option<String>,
    title: String,
    body: Option<String>,
    created: String,
    modified: String,
}

impl RawNote {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            book_id: row.get(1)?,
            title: row.get(2)?,
            body: row.get(3)?,
            created: row.get(4)?,
            modified: row.get(5)?,
        })
    }

    fn into_note(self) -> StoreResult<Note> {
        let created = parse_timestamp(&self.created, "created")?;
        let modified = parse_timestamp(&self.modified, "modified")?;

        let mut builder =
            Note::builder(self.id, self.title, created, modified).body(self.body.unwrap_or_default());
        if let Some(book_id) = self.book_id {
            builder = builder.notebook(book_id);
        }
        Ok(builder.build())
    }
}

const INSERT_BOOK: &str =
    "INSERT OR REPLACE INTO books (id, name, parent_id, position) VALUES (?, ?, ?, ?)";

const INSERT_NOTE: &str = "INSERT OR REPLACE INTO notes (id, book_id, title, body, created, modified)
     VALUES (?, ?, ?, ?, ?, ?)";

const INSERT_FILE: &str =
    "INSERT OR REPLACE INTO files (id, name, content_type, data) VALUES (?, ?, ?, ?)";

fn book_params(row: &NotebookRow) -> impl Params + '_ {
    (&row.id, &row.name, &row.parent_id, row.position)
}

fn note_params(note: &Note) -> impl Params + '_ {
    (
        note.id(),
        note.notebook_id(),
        note.title(),
        note.body(),
        format_timestamp(note.created()),
        format_timestamp(note.modified()),
    )
}

fn file_params(file: &StoredFile) -> impl Params + '_ {
    (&file.id, &file.name, &file.content_type, &file.data)
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(value: &str, field: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(format!("invalid {} timestamp '{}': {}", field, value, e)))
}
