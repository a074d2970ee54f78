//! Error types for content indexing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while indexing a content directory.
///
/// Every variant is fatal for the indexing call that produced it: a single
/// unreadable or malformed file aborts the whole listing.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Content directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse front-matter in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unknown content type: {0}. Available: post, page")]
    UnknownContentType(String),
}

impl IndexError {
    /// The file or directory the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            IndexError::DirectoryNotFound { path }
            | IndexError::FileRead { path, .. }
            | IndexError::Parse { path, .. } => Some(path),
            IndexError::UnknownContentType(_) => None,
        }
    }
}
