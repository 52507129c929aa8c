//! Counters collected during an export.

use serde::Serialize;
use std::path::PathBuf;

/// What a completed export produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Directory (or file, for a single note) the user picked.
    pub destination: PathBuf,
    /// Notebooks walked.
    pub notebooks: usize,
    /// Markdown files written.
    pub notes: usize,
    /// Notes skipped for having no body.
    pub skipped: usize,
    /// Internal images extracted.
    pub images: usize,
}

impl ExportSummary {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }

    /// One-line human description.
    pub fn describe(&self) -> String {
        let notes = plural(self.notes, "note", "notes");
        let mut message = if self.notebooks > 0 {
            format!(
                "Exported {} from {} to {}",
                notes,
                plural(self.notebooks, "notebook", "notebooks"),
                self.destination.display()
            )
        } else {
            format!("Exported {} to {}", notes, self.destination.display())
        };

        if self.images > 0 {
            message.push_str(&format!(" ({})", plural(self.images, "image", "images")));
        }
        message
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
