//! LocalLens Server Library - photo upload, insight and history service
//!
//! This library exposes the server components for use in integration tests.
//! The main binary uses these same components.

pub mod config;
pub mod error;
pub mod file_store;
pub mod handlers;
pub mod history;
pub mod ingest;
pub mod multipart;
pub mod openapi;
pub mod record_log;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, HistoryPageError};
pub use file_store::{FileStore, LocalFileStore, StorageError, UPLOADS_ROUTE};
pub use ingest::ingest_upload;
pub use openapi::ApiDoc;
pub use record_log::{
    MemoryRecordLog, PostgresRecordLog, RecordLog, RecordLogError, RecordLogHandle,
};
pub use routes::{create_router, create_router_with_config};
pub use state::AppState;
