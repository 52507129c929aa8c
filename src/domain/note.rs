//! Note struct as supplied by the note store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A note read from the library.
///
/// Notes are read-only to the exporter. The rewritten body produced during
/// export only ever reaches the output file, never the note itself.
///
/// # Examples
///
/// ```
/// use mdexport::domain::Note;
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::builder("note:1", "API Design", now, now)
///     .notebook("book:1")
///     .body("Some text")
///     .build();
/// assert_eq!(note.title(), "API Design");
/// assert!(note.has_body());
/// ```
#[derive(Clone, PartialEq, Serialize)]
pub struct Note {
    id: String,
    notebook_id: Option<String>,
    title: String,
    body: String,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Note {
    /// Creates a note with an empty body and no owning notebook.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            notebook_id: None,
            title: title.into(),
            body: String::new(),
            created,
            modified,
        }
    }

    /// Creates a builder for constructing a Note with optional fields.
    pub fn builder(
        id: impl Into<String>,
        title: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> NoteBuilder {
        NoteBuilder {
            note: Self::new(id, title, created, modified),
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the identifier of the notebook owning this note, if any.
    pub fn notebook_id(&self) -> Option<&str> {
        self.notebook_id.as_deref()
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw note body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns true when the note has any body content to export.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("notebook_id", &self.notebook_id)
            .field("title", &self.title)
            .field("body_len", &self.body.len())
            .field("created", &self.created)
            .field("modified", &self.modified)
            .finish()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    note: Note,
}

impl NoteBuilder {
    /// Sets the owning notebook.
    pub fn notebook(mut self, notebook_id: impl Into<String>) -> Self {
        self.note.notebook_id = Some(notebook_id.into());
        self
    }

    /// Sets the note body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.note.body = body.into();
        self
    }

    /// Builds the Note.
    pub fn build(self) -> Note {
        self.note
    }
}
