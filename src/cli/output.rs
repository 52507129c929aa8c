//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A notebook in the `books` listing.
#[derive(Debug, Serialize)]
pub struct BookListing {
    pub id: String,
    pub name: String,
    /// Nesting depth, 0 for top-level notebooks.
    pub depth: usize,
    /// Folder the notebook exports to, relative to an `all` export.
    pub path: String,
}
