//! Error types for the record log module.

use thiserror::Error;

/// Errors that can occur when interacting with the record log.
#[derive(Debug, Error)]
pub enum RecordLogError {
    /// The startup connection has not completed (or failed)
    #[error("Record log is not ready")]
    NotReady,

    /// Database connection failed
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration execution failed
    #[error("Migration error: {0}")]
    Migration(String),

    /// SQL query execution failed or the write was rejected
    #[error("Query error: {0}")]
    Query(String),
}

impl From<sqlx::Error> for RecordLogError {
    fn from(e: sqlx::Error) -> Self {
        Self::Query(e.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for RecordLogError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(e.to_string())
    }
}
