//! Local filesystem implementation of the file store.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use locallens_core::stored_name;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use super::{FileStore, StorageError};

/// Attempts at finding an unused stored name before giving up.
const MAX_NAME_ATTEMPTS: usize = 8;

/// Stores each upload as one immutable file directly under `root`.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Create a store rooted at `root`. The directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the files are written to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage directory if it does not exist yet.
    pub async fn prepare(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Directory {
                path: self.root.clone(),
                source,
            })
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn put(&self, bytes: &[u8], original_name: &str) -> Result<String, StorageError> {
        self.prepare().await?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = stored_name(Utc::now(), original_name);
            let path = self.root.join(&name);

            // create_new never clobbers another upload's file
            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::debug!(stored_name = %name, "Stored name collision, regenerating");
                    continue;
                }
                Err(source) => return Err(StorageError::Write { path, source }),
            };

            file.write_all(bytes)
                .await
                .map_err(|source| StorageError::Write {
                    path: path.clone(),
                    source,
                })?;

            file.sync_all()
                .await
                .map_err(|source| StorageError::Write {
                    path: path.clone(),
                    source,
                })?;

            tracing::debug!(stored_name = %name, size = bytes.len(), "Stored upload");

            return Ok(name);
        }

        Err(StorageError::NameExhausted(MAX_NAME_ATTEMPTS))
    }
}
