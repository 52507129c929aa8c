//! File I/O, filename sanitizing, image probing, logging

mod fs;
pub mod logging;
mod probe;
mod sanitize;

pub use fs::{FsError, ensure_dir, set_file_times, write_file};
pub use probe::ImageSizeProbe;
pub use sanitize::{DEFAULT_REPLACEMENT, FALLBACK_NAME, sanitize, sanitize_filename};
