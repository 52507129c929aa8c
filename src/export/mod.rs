//! Markdown export of notebooks and notes.
//!
//! The pipeline runs top-down: the [`Exporter`] picks a destination and
//! drives the [`TreeExporter`], which hands every note to the
//! [`NoteExporter`], which runs the body through the [`ImageRewriter`].

mod collab;
mod error;
pub mod images;
pub mod note;
mod orchestrator;
mod summary;
mod tree;

#[cfg(test)]
pub(crate) mod test_support;

pub use collab::{
    DestinationPicker, ExtractError, ImageExtractor, Notifier, ProbeError, SizeProbe,
};
pub use error::{ExportError, ExportResult};
pub use images::{
    ALT_PLACEHOLDER, DEFAULT_IMAGES_DIR, DEFAULT_SCHEME, ImageReference, ImageRewriter,
    ImageSource, RewriteOptions, RewriteOutcome, unwrap_paragraphs,
};
pub use note::{NoteExporter, note_filename};
pub use orchestrator::{ExportReport, Exporter};
pub use summary::ExportSummary;
pub use tree::TreeExporter;
