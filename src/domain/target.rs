//! Export destinations.

use std::path::{Path, PathBuf};

/// Where a notebook export lands.
///
/// `create_subdir` controls whether the notebook gets its own directory
/// under `dir`. It is only turned off for the notebook a user explicitly
/// picked, so its notes land directly in the chosen directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    dir: PathBuf,
    create_subdir: bool,
}

impl ExportTarget {
    /// Target that creates a subdirectory for the exported notebook.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            create_subdir: true,
        }
    }

    /// Target that exports the notebook's contents straight into `dir`.
    pub fn flat(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            create_subdir: false,
        }
    }

    /// The destination parent directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether a notebook-named subdirectory is created.
    pub fn create_subdir(&self) -> bool {
        self.create_subdir
    }
}
