//! Process-wide record log handle
//!
//! The database connection is opened once, in the background, while the
//! server is already accepting requests. Until it lands the handle is
//! "pending" and every call fails immediately with
//! [`RecordLogError::NotReady`]; nothing waits for the connection. If the
//! connection attempt fails the handle stays pending for the life of the
//! process.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use locallens_core::UploadRecord;
use tokio::task::JoinHandle;

use super::{MemoryRecordLog, PostgresRecordLog, RecordLog, RecordLogError};

/// Shared, cloneable access to the record log backend.
#[derive(Clone, Default)]
pub struct RecordLogHandle {
    slot: Arc<OnceLock<Arc<dyn RecordLog>>>,
}

impl RecordLogHandle {
    /// A handle with no backend installed yet
    pub fn pending() -> Self {
        Self::default()
    }

    /// A handle that is ready right away
    pub fn ready(log: Arc<dyn RecordLog>) -> Self {
        let handle = Self::pending();
        handle.install(log);
        handle
    }

    /// A ready handle over a fresh in-memory log (development only)
    pub fn in_memory() -> Self {
        Self::ready(Arc::new(MemoryRecordLog::new()))
    }

    /// Install the backend. Returns `false` if one was already installed, in
    /// which case `log` is dropped.
    pub fn install(&self, log: Arc<dyn RecordLog>) -> bool {
        self.slot.set(log).is_ok()
    }

    /// Whether a backend has been installed
    pub fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The installed backend, or `NotReady`
    pub fn get(&self) -> Result<Arc<dyn RecordLog>, RecordLogError> {
        self.slot.get().cloned().ok_or(RecordLogError::NotReady)
    }

    /// Open the PostgreSQL connection on a background task and install it
    /// when it succeeds.
    ///
    /// A failure is logged and leaves the handle pending; the server keeps
    /// running and requests fail individually.
    pub fn connect_in_background(
        &self,
        database_url: String,
        max_connections: u32,
    ) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            match PostgresRecordLog::connect(&database_url, max_connections).await {
                Ok(log) => {
                    if handle.install(Arc::new(log)) {
                        tracing::info!("Record log ready (PostgreSQL)");
                    } else {
                        tracing::warn!("Record log already installed, dropping new connection");
                    }
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        "Record log connection failed - uploads and history will fail until restart"
                    );
                }
            }
        })
    }
}

#[async_trait]
impl RecordLog for RecordLogHandle {
    async fn append(&self, record: &UploadRecord) -> Result<(), RecordLogError> {
        self.get()?.append(record).await
    }

    async fn list_all_descending(&self) -> Result<Vec<UploadRecord>, RecordLogError> {
        self.get()?.list_all_descending().await
    }

    fn backend(&self) -> &'static str {
        self.slot.get().map(|log| log.backend()).unwrap_or("pending")
    }
}

impl std::fmt::Debug for RecordLogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordLogHandle")
            .field("backend", &self.backend())
            .finish()
    }
}
