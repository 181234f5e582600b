//! Error types for the file store module.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while persisting uploaded bytes.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage root could not be created
    #[error("Failed to create storage directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating, writing or syncing a file failed
    #[error("Failed to write file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every generated name collided with an existing file
    #[error("No unique stored name found after {0} attempts")]
    NameExhausted(usize),
}
