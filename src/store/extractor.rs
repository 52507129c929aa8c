//! Image extraction from library attachments.

use std::fs;
use std::path::{Path, PathBuf};

use crate::export::{ExtractError, ImageExtractor};
use crate::infra::sanitize_filename;
use crate::store::SqliteStore;

/// Extension used when neither the file name nor its content type tell.
const FALLBACK_EXTENSION: &str = "bin";

/// Writes `<scheme>://file:<id>` attachments out of the library.
///
/// Files are named `<id>.<ext>`, so re-exporting overwrites the same file
/// rather than piling up copies.
pub struct LibraryImageExtractor<'a> {
    store: &'a SqliteStore,
    prefix: String,
}

impl<'a> LibraryImageExtractor<'a> {
    pub fn new(store: &'a SqliteStore, scheme: &str) -> Self {
        Self {
            store,
            prefix: format!("{}://file:", scheme),
        }
    }
}

impl ImageExtractor for LibraryImageExtractor<'_> {
    fn export_image(&self, uri: &str, dir: &Path) -> Result<Option<PathBuf>, ExtractError> {
        let id = uri
            .strip_prefix(&self.prefix)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ExtractError::InvalidReference(uri.to_string()))?;

        let Some(file) = self.store.load_file(id)? else {
            return Ok(None);
        };

        let ext = extension_for(&file.name, file.content_type.as_deref());
        let path = dir.join(sanitize_filename(&format!("{}.{}", id, ext)));
        fs::write(&path, &file.data).map_err(|e| ExtractError::Io {
            path: path.clone(),
            source: e,
        })?;

        tracing::trace!(id, path = %path.display(), bytes = file.data.len(), "extracted image");
        Ok(Some(path))
    }
}

fn extension_for(name: &str, content_type: Option<&str>) -> String {
    if let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str())
        && !ext.is_empty()
    {
        return ext.to_ascii_lowercase();
    }

    content_type
        .and_then(mime_guess::get_mime_extensions_str)
        .and_then(|exts| exts.iter().find(|e| **e == "jpg").or(exts.first()))
        .map(|e| e.to_string())
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}
