//! Recursive notebook export.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{ExportTarget, Notebook};
use crate::export::{ExportResult, ExportSummary, NoteExporter};
use crate::infra::{ensure_dir, sanitize_filename};
use crate::store::NoteStore;

/// Mirrors a notebook tree as nested directories of Markdown files.
///
/// Each notebook's notes are written before any of its children are
/// visited, and every child subtree finishes before the next sibling
/// starts.
pub struct TreeExporter<'a> {
    store: &'a dyn NoteStore,
    notes: &'a NoteExporter<'a>,
    visited: HashSet<String>,
}

impl<'a> TreeExporter<'a> {
    pub fn new(store: &'a dyn NoteStore, notes: &'a NoteExporter<'a>) -> Self {
        Self {
            store,
            notes,
            visited: HashSet::new(),
        }
    }

    /// Exports `notebook` and all its descendants under `target`.
    ///
    /// Returns the directory the notebook's notes were written to.
    pub fn export(
        &mut self,
        target: &ExportTarget,
        notebook: &Notebook,
        summary: &mut ExportSummary,
    ) -> ExportResult<PathBuf> {
        let dir = notebook_dir(target.dir(), notebook, target.create_subdir());
        self.export_into(&dir, notebook, summary)?;
        Ok(dir)
    }

    fn export_into(
        &mut self,
        dir: &Path,
        notebook: &Notebook,
        summary: &mut ExportSummary,
    ) -> ExportResult<()> {
        if !self.visited.insert(notebook.id().to_string()) {
            tracing::warn!(
                notebook = notebook.id(),
                "notebook appears twice in the tree, skipping repeat"
            );
            return Ok(());
        }

        ensure_dir(dir)?;
        summary.notebooks += 1;

        let notes = self.store.notes_in_notebook(notebook.id())?;
        tracing::debug!(
            notebook = notebook.name(),
            notes = notes.len(),
            dir = %dir.display(),
            "exporting notebook"
        );
        for note in &notes {
            self.notes.export(note, dir, None, summary)?;
        }

        for child in notebook.children() {
            let child_dir = notebook_dir(dir, child, true);
            self.export_into(&child_dir, child, summary)?;
        }

        Ok(())
    }
}

fn notebook_dir(parent: &Path, notebook: &Notebook, create_subdir: bool) -> PathBuf {
    if create_subdir {
        parent.join(sanitize_filename(notebook.name()))
    } else {
        parent.to_path_buf()
    }
}
