//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use mdexport::domain::Note;

use crate::common::fixed_time;

/// Builder for creating test notes with sensible defaults.
#[derive(Debug)]
pub struct TestNote {
    id: String,
    book: Option<String>,
    title: String,
    body: String,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl TestNote {
    /// Creates a note with the given id and title, a non-empty body and
    /// fixed timestamps.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            book: None,
            title: title.into(),
            body: "Body text".to_string(),
            created: fixed_time(),
            modified: fixed_time(),
        }
    }

    /// Places the note in a notebook.
    pub fn in_book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    /// Sets the body content.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the modified timestamp.
    pub fn modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn get_body(&self) -> &str {
        &self.body
    }

    pub fn get_modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Converts to a domain Note.
    pub fn to_note(&self) -> Note {
        let builder = Note::builder(&self.id, &self.title, self.created, self.modified)
            .body(&self.body);
        match &self.book {
            Some(book) => builder.notebook(book).build(),
            None => builder.build(),
        }
    }
}
