//! API error handling module
//!
//! One error type for the JSON endpoints plus a plain-text wrapper for the
//! HTML history page. Internal details are logged; clients only ever see the
//! fixed messages of the public contract.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::file_store::StorageError;
use crate::record_log::RecordLogError;

/// Client message for a request without a `photo` file
pub const MISSING_FILE_MESSAGE: &str = "No file uploaded";

/// Client message for every storage or persistence failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Plain-text body of a failed history page
pub const HISTORY_ERROR_MESSAGE: &str = "Could not load history";

/// API error type with one variant per failure category
#[derive(Debug, Error)]
pub enum ApiError {
    /// No uploaded file under the expected field
    #[error("No file uploaded")]
    MissingFile,

    /// Malformed multipart body or unexpected file field
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Writing the photo bytes failed
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),

    /// The record log was unreachable or rejected the operation
    #[error("Persistence failure: {0}")]
    Persistence(#[from] RecordLogError),
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get sanitized error message for client response
    fn client_message(&self) -> String {
        match self {
            Self::MissingFile => MISSING_FILE_MESSAGE.to_string(),
            Self::BadRequest(message) => message.clone(),
            Self::Storage(_) | Self::Persistence(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Get the error category for logging
    fn error_category(&self) -> &'static str {
        match self {
            Self::MissingFile => "missing_file",
            Self::BadRequest(_) => "bad_request",
            Self::Storage(_) => "storage",
            Self::Persistence(RecordLogError::NotReady) => "persistence_not_ready",
            Self::Persistence(_) => "persistence",
        }
    }

    /// Log with severity matching the status
    fn log(&self) {
        let status = self.status_code();
        let category = self.error_category();

        if status.is_client_error() {
            tracing::warn!(
                status = %status,
                category = category,
                error = %self,
                "Client error"
            );
        } else {
            tracing::error!(
                status = %status,
                category = category,
                error = %self,
                "Server error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let body = serde_json::json!({
            "message": self.client_message(),
        });

        (self.status_code(), Json(body)).into_response()
    }
}

/// Failure of the HTML history page, rendered as plain text
#[derive(Debug, Error)]
#[error("History page failed: {0}")]
pub struct HistoryPageError(#[from] pub RecordLogError);

impl IntoResponse for HistoryPageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Error loading history");
        (StatusCode::INTERNAL_SERVER_ERROR, HISTORY_ERROR_MESSAGE).into_response()
    }
}
