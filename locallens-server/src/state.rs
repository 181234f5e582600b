//! Application state module
//!
//! Defines shared state accessible across all request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::file_store::{FileStore, LocalFileStore};
use crate::record_log::RecordLogHandle;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Where uploaded photo bytes are written
    pub file_store: Arc<dyn FileStore>,
    /// Record log, possibly still waiting for its startup connection
    pub record_log: RecordLogHandle,
    /// Directory served under `/uploads`
    pub upload_dir: PathBuf,
}

impl AppState {
    /// State serving and writing `file_store`'s directory and logging
    /// through `record_log`
    pub fn new(file_store: LocalFileStore, record_log: RecordLogHandle) -> Self {
        Self {
            upload_dir: file_store.root().to_path_buf(),
            file_store: Arc::new(file_store),
            record_log,
        }
    }

    /// State with an in-memory record log (development and tests)
    pub fn in_memory(upload_dir: impl Into<PathBuf>) -> Self {
        Self::new(LocalFileStore::new(upload_dir), RecordLogHandle::in_memory())
    }
}
