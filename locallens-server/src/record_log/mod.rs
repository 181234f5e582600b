//! Record log for analyzed uploads.
//!
//! The log is append-only: one record per successful ingest, read back in
//! full, newest first, by the history view. Two backends exist:
//!
//! - `PostgresRecordLog` for deployments with `DATABASE_URL` set
//! - `MemoryRecordLog` for development and tests (lost on restart)
//!
//! Handlers never hold a backend directly. They go through
//! [`RecordLogHandle`], which starts out "not ready" and fails every call
//! until the startup connection has been established.

pub mod error;
mod handle;
mod memory;
mod postgres;

pub use error::RecordLogError;
pub use handle::RecordLogHandle;
pub use memory::MemoryRecordLog;
pub use postgres::PostgresRecordLog;

use async_trait::async_trait;
use locallens_core::UploadRecord;

/// Append-only persistence of upload records.
///
/// Each `append` is one independent write; concurrent appends rely on the
/// backend's single-record atomicity and never read-modify-write.
#[async_trait]
pub trait RecordLog: Send + Sync {
    /// Durably store one record.
    async fn append(&self, record: &UploadRecord) -> Result<(), RecordLogError>;

    /// Every stored record, most recent `timestamp` first. Records sharing a
    /// timestamp come newest-insert first.
    async fn list_all_descending(&self) -> Result<Vec<UploadRecord>, RecordLogError>;

    /// Short backend name for health reporting
    fn backend(&self) -> &'static str;
}
