//! Collaborators the export pipeline depends on.
//!
//! Destination picking, user notification, image extraction and image size
//! probing live outside the pipeline. Each sits behind a trait so the
//! pipeline can be driven by the CLI or by tests with the same code.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::export::ExportSummary;
use crate::store::StoreError;

/// Chooses where an export goes.
///
/// Returning `None` means the user cancelled; the export stops silently.
pub trait DestinationPicker {
    /// Asks for a destination directory.
    fn pick_directory(&mut self, prompt: &str) -> Option<PathBuf>;

    /// Asks for a destination file, suggesting `default_name`.
    fn pick_file(&mut self, default_name: &str) -> Option<PathBuf>;
}

/// Reports the outcome of a top-level export to the user.
pub trait Notifier {
    /// An export finished.
    fn info(&mut self, message: &str, summary: &ExportSummary);

    /// An export failed; `detail` is the human-readable cause.
    fn error(&mut self, message: &str, detail: &str);
}

/// Errors from materializing an internal image reference.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("not an internal image reference: {0}")]
    InvalidReference(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Materializes internal image references as files.
pub trait ImageExtractor {
    /// Writes the payload behind `uri` into `dir`.
    ///
    /// Returns the written file's path, or `None` when the reference does
    /// not resolve to a payload.
    fn export_image(&self, uri: &str, dir: &Path) -> Result<Option<PathBuf>, ExtractError>;
}

/// Error reading an image's intrinsic dimensions.
#[derive(Debug, Error)]
#[error("failed to probe image size for {path}: {source}")]
pub struct ProbeError {
    pub path: PathBuf,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

/// Reads intrinsic pixel dimensions of an image file.
pub trait SizeProbe {
    /// Returns `(width, height)` in pixels.
    fn probe(&self, path: &Path) -> Result<(u32, u32), ProbeError>;
}
