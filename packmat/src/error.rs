//! Errors raised while moving stores in and out of the process

use std::io;
use std::path::PathBuf;

use packmat_core::{ErrorCategory, StoreError};
use thiserror::Error;

/// Failures of file, console and JSON persistence
#[derive(Debug, Error)]
pub enum PersistError {
    /// A file could not be opened, created, read or written
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A console or in-memory stream failed mid-read or mid-write
    #[error("stream I/O failed: {0}")]
    Stream(#[source] io::Error),

    /// The content was read but does not describe a valid store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// JSON (de)serialization failed
    #[cfg(feature = "serde")]
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PersistError::Io {
            path: path.into(),
            source,
        }
    }

    /// Store-level category, if this wraps a store error
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            PersistError::Store(e) => Some(e.category()),
            _ => None,
        }
    }
}

/// Result type for persistence operations
pub type Result<T> = std::result::Result<T, PersistError>;
