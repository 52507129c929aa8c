//! Single-note export.

use std::path::{Path, PathBuf};

use crate::domain::Note;
use crate::export::{ExportResult, ExportSummary, ImageRewriter};
use crate::infra::{sanitize_filename, set_file_times, write_file};

/// Default file name for a note: sanitized title plus `.md`.
pub fn note_filename(title: &str) -> String {
    format!("{}.md", sanitize_filename(title))
}

/// Title heading prepended to the body.
fn compose(note: &Note) -> String {
    format!("# {}\n\n{}", note.title(), note.body())
}

/// Writes notes as Markdown files.
pub struct NoteExporter<'a> {
    rewriter: ImageRewriter<'a>,
}

impl<'a> NoteExporter<'a> {
    pub fn new(rewriter: ImageRewriter<'a>) -> Self {
        Self { rewriter }
    }

    /// Exports one note into `dest_dir`.
    ///
    /// Notes without a body are skipped and produce no file. An existing
    /// file at the target path is overwritten. The written file's access and
    /// modification times are set to the note's modification time.
    ///
    /// Returns the written path, or `None` when skipped.
    pub fn export(
        &self,
        note: &Note,
        dest_dir: &Path,
        filename: Option<&str>,
        summary: &mut ExportSummary,
    ) -> ExportResult<Option<PathBuf>> {
        if !note.has_body() {
            tracing::debug!(note = %note, "skipping note without body");
            summary.skipped += 1;
            return Ok(None);
        }

        let filename = filename
            .map(str::to_string)
            .unwrap_or_else(|| note_filename(note.title()));
        let path = dest_dir.join(filename);

        let rewritten = self.rewriter.rewrite(&compose(note), dest_dir, Some(dest_dir))?;

        write_file(&path, rewritten.body.as_bytes())?;
        set_file_times(&path, note.modified())?;

        tracing::debug!(note = %note, path = %path.display(), "exported note");
        summary.notes += 1;
        summary.images += rewritten.extracted();
        Ok(Some(path))
    }
}
