//! File access used by the note workflows.
//!
//! The codec itself never touches the filesystem; callers read and write
//! through [`FileAccess`] so the workflows can run against any backing store.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

/// Errors raised by a [`FileAccess`] implementation.
#[derive(Debug, Error)]
pub enum FileAccessError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot expand path '{0}'")]
    Expand(String),
}

/// Raw document storage.
pub trait FileAccess {
    /// Read the full text of a document.
    fn read_to_string(&self, path: &Path) -> Result<String, FileAccessError>;

    /// Replace the full text of a document.
    fn write(&self, path: &Path, content: &str) -> Result<(), FileAccessError>;

    /// Last modification time.
    fn modified(&self, path: &Path) -> Result<DateTime<Local>, FileAccessError>;

    /// Whether the document exists and can be opened for reading.
    fn is_readable(&self, path: &Path) -> bool;

    /// Expand `~` and environment variables in a user supplied path.
    fn expand_path(&self, input: &str) -> Result<PathBuf, FileAccessError> {
        shellexpand::full(input)
            .map(|expanded| PathBuf::from(expanded.into_owned()))
            .map_err(|_| FileAccessError::Expand(input.to_string()))
    }
}

/// [`FileAccess`] over the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFiles;

impl FileAccess for LocalFiles {
    fn read_to_string(&self, path: &Path) -> Result<String, FileAccessError> {
        fs::read_to_string(path)
            .map_err(|source| FileAccessError::Read { path: path.to_path_buf(), source })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), FileAccessError> {
        fs::write(path, content)
            .map_err(|source| FileAccessError::Write { path: path.to_path_buf(), source })
    }

    fn modified(&self, path: &Path) -> Result<DateTime<Local>, FileAccessError> {
        let metadata = fs::metadata(path).map_err(|source| FileAccessError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        let modified = metadata.modified().map_err(|source| FileAccessError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DateTime::<Local>::from(modified))
    }

    fn is_readable(&self, path: &Path) -> bool {
        path.is_file() && fs::File::open(path).is_ok()
    }
}
