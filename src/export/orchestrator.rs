//! Top-level export entry points.
//!
//! Each entry point picks a destination, runs the export strictly
//! sequentially, and reports exactly once: a summary on success, a single
//! failure message on error, nothing when the user cancels.

use std::path::{Path, PathBuf};

use crate::domain::{ExportTarget, find_notebook};
use crate::export::note::note_filename;
use crate::export::{
    DestinationPicker, ExportError, ExportResult, ExportSummary, ImageExtractor, ImageRewriter,
    NoteExporter, Notifier, RewriteOptions, SizeProbe, TreeExporter,
};
use crate::infra::ensure_dir;
use crate::store::NoteStore;

/// Outcome of one top-level export invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReport {
    /// The export ran to completion.
    Completed(ExportSummary),
    /// The user picked no destination; nothing was written.
    Cancelled,
    /// The export stopped at the first error.
    Failed(String),
}

impl ExportReport {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Runs exports against injected collaborators.
pub struct Exporter<'a> {
    store: &'a dyn NoteStore,
    extractor: &'a dyn ImageExtractor,
    probe: &'a dyn SizeProbe,
    picker: &'a mut dyn DestinationPicker,
    notifier: &'a mut dyn Notifier,
    options: RewriteOptions,
}

impl<'a> Exporter<'a> {
    pub fn new(
        store: &'a dyn NoteStore,
        extractor: &'a dyn ImageExtractor,
        probe: &'a dyn SizeProbe,
        picker: &'a mut dyn DestinationPicker,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self {
            store,
            extractor,
            probe,
            picker,
            notifier,
            options: RewriteOptions::default(),
        }
    }

    /// Overrides the image rewriting options.
    pub fn with_options(mut self, options: RewriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Exports every top-level notebook, each into its own subdirectory.
    pub fn export_all(&mut self) -> ExportReport {
        self.run("export all notebooks", |this| {
            let Some(dir) = this.picker.pick_directory("Export all notebooks to") else {
                return Ok(None);
            };

            let roots = this.store.notebooks()?;
            let mut summary = ExportSummary::new(&dir);
            let target = ExportTarget::new(&dir);
            this.with_tree(|tree| {
                for notebook in &roots {
                    tree.export(&target, notebook, &mut summary)?;
                }
                Ok(())
            })?;
            Ok(Some(summary))
        })
    }

    /// Exports one notebook's contents directly into the chosen directory.
    ///
    /// The notebook is looked up before prompting, so an unknown id fails
    /// without touching the filesystem.
    pub fn export_notebook(&mut self, id: &str) -> ExportReport {
        self.run("export notebook", |this| {
            let roots = this.store.notebooks()?;
            let notebook = find_notebook(&roots, id)
                .ok_or_else(|| ExportError::NotebookNotFound { id: id.to_string() })?;

            let prompt = format!("Export notebook '{}' to", notebook.name());
            let Some(dir) = this.picker.pick_directory(&prompt) else {
                return Ok(None);
            };

            let mut summary = ExportSummary::new(&dir);
            let target = ExportTarget::flat(&dir);
            this.with_tree(|tree| tree.export(&target, notebook, &mut summary).map(|_| ()))?;
            Ok(Some(summary))
        })
    }

    /// Exports a single note to a chosen file.
    pub fn export_note(&mut self, id: &str) -> ExportReport {
        self.run("export note", |this| {
            let note = this
                .store
                .load_note(id)?
                .ok_or_else(|| ExportError::NoteNotFound { id: id.to_string() })?;

            let Some(path) = this.picker.pick_file(&note_filename(note.title())) else {
                return Ok(None);
            };
            let (dir, filename) = split_file_path(&path, note.title());
            ensure_dir(&dir)?;

            let mut summary = ExportSummary::new(&path);
            this.with_notes(|notes| {
                notes.export(&note, &dir, Some(&filename), &mut summary)?;
                Ok(())
            })?;
            Ok(Some(summary))
        })
    }

    /// Exports a set of notes into one directory.
    ///
    /// Ids that don't resolve to a note are skipped silently.
    pub fn export_notes(&mut self, ids: &[String]) -> ExportReport {
        self.run("export notes", |this| {
            let Some(dir) = this.picker.pick_directory("Export notes to") else {
                return Ok(None);
            };
            ensure_dir(&dir)?;

            let mut summary = ExportSummary::new(&dir);
            let store = this.store;
            this.with_notes(|notes| {
                for id in ids {
                    let Some(note) = store.load_note(id)? else {
                        tracing::debug!(id = %id, "note not found, skipping");
                        continue;
                    };
                    notes.export(&note, &dir, None, &mut summary)?;
                }
                Ok(())
            })?;
            Ok(Some(summary))
        })
    }

    /// Runs one invocation and reports its outcome exactly once.
    fn run<F>(&mut self, action: &str, f: F) -> ExportReport
    where
        F: FnOnce(&mut Self) -> ExportResult<Option<ExportSummary>>,
    {
        match f(self) {
            Ok(Some(summary)) => {
                tracing::info!(
                    action,
                    notebooks = summary.notebooks,
                    notes = summary.notes,
                    images = summary.images,
                    "export finished"
                );
                self.notifier.info(&summary.describe(), &summary);
                ExportReport::Completed(summary)
            }
            Ok(None) => {
                tracing::debug!(action, "export cancelled");
                ExportReport::Cancelled
            }
            Err(e) => {
                tracing::error!(action, error = %e, "export failed");
                let detail = e.to_string();
                self.notifier.error(&format!("Failed to {}", action), &detail);
                ExportReport::Failed(detail)
            }
        }
    }

    fn with_notes<T>(
        &self,
        f: impl FnOnce(&NoteExporter<'_>) -> ExportResult<T>,
    ) -> ExportResult<T> {
        let rewriter = ImageRewriter::new(self.extractor, self.probe, &self.options);
        f(&NoteExporter::new(rewriter))
    }

    fn with_tree<T>(
        &self,
        f: impl FnOnce(&mut TreeExporter<'_>) -> ExportResult<T>,
    ) -> ExportResult<T> {
        let store = self.store;
        self.with_notes(|notes| f(&mut TreeExporter::new(store, notes)))
    }
}

/// Splits a picked file path into its directory and file name.
///
/// A path without a file name falls back to the note's default name.
fn split_file_path(path: &Path, title: &str) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| note_filename(title));
    (dir, filename)
}
