//! Photo analysis handler
//!
//! Handles POST /analyze requests: store the uploaded photo, classify it by
//! file name and log the result.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::handlers::AppState;
use crate::ingest::ingest_upload;
use crate::multipart::{MultipartFields, PHOTO_FIELD};

/// Response for a successful analysis
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    #[schema(example = "Analysis complete")]
    pub message: &'static str,
    /// Insight derived from the file name
    #[schema(example = "This looks like a food menu.")]
    pub insight: String,
    /// Stored name; the photo is served at `/uploads/<fileStoredAs>`
    #[serde(rename = "fileStoredAs")]
    #[schema(example = "1714557600000-3f2a9c1b7d4e-menu.png")]
    pub file_stored_as: String,
}

/// Analyze an uploaded photo
///
/// Accepts multipart/form-data with:
/// - **photo** (required): the image file; its name drives the insight
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "Analysis",
    request_body(
        content_type = "multipart/form-data",
        description = "Photo under the `photo` field"
    ),
    responses(
        (status = 200, description = "Photo stored and analyzed", body = AnalyzeResponse),
        (status = 400, description = "No file uploaded or malformed form"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let fields = MultipartFields::parse(&mut multipart, PHOTO_FIELD).await?;

    let record = ingest_upload(
        state.file_store.as_ref(),
        &state.record_log,
        fields.into_file(),
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        message: "Analysis complete",
        insight: record.insight,
        file_stored_as: record.stored_name,
    }))
}
