//! Image size probing backed by the `image` crate.

use std::path::Path;

use crate::export::{ProbeError, SizeProbe};

/// Reads dimensions from image headers without decoding pixel data.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageSizeProbe;

impl SizeProbe for ImageSizeProbe {
    fn probe(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        image::image_dimensions(path).map_err(|e| ProbeError {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }
}
