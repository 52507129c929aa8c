//! Filesystem operations for exported files: directories, atomic writes, timestamps.

use chrono::{DateTime, Utc};
use std::fs::{self, File, FileTimes};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during file system operations on exported files.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to set timestamps on {path}: {source}")]
    SetTimes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Creates a directory (and its parents) unless it already exists.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if the path exists as something else.
/// Returns `FsError::CreateDir` if creation fails.
pub fn ensure_dir(path: &Path) -> Result<(), FsError> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(FsError::NotADirectory { path: path.into() });
    }

    fs::create_dir_all(path).map_err(|e| FsError::CreateDir {
        path: path.into(),
        source: e,
    })
}

/// Writes a file atomically, replacing any existing file at `path`.
///
/// Uses a temporary file and atomic rename to prevent partial writes.
/// The parent directory must exist.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), FsError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(content).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Sets both the access and modification time of a file.
///
/// # Errors
///
/// Returns `FsError::SetTimes` if the file can't be opened or updated.
pub fn set_file_times(path: &Path, timestamp: DateTime<Utc>) -> Result<(), FsError> {
    let time = SystemTime::from(timestamp);
    let times = FileTimes::new().set_accessed(time).set_modified(time);

    File::options()
        .write(true)
        .open(path)
        .and_then(|file| file.set_times(times))
        .map_err(|e| FsError::SetTimes {
            path: path.into(),
            source: e,
        })
}
