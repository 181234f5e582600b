//! Multipart form parsing helpers
//!
//! Extracts the single uploaded photo from a multipart/form-data request.

use axum::extract::Multipart;

use crate::error::ApiError;

/// Form field carrying the photo
pub const PHOTO_FIELD: &str = "photo";

/// Represents a file uploaded via multipart form
#[derive(Debug, Clone)]
pub struct FileField {
    /// File data bytes
    pub data: Vec<u8>,
    /// Original filename as sent by the client
    pub file_name: String,
}

/// Parsed multipart form
///
/// Holds at most one file, taken from the expected field. Plain text parts
/// are skipped; any other file part is rejected.
#[derive(Debug)]
pub struct MultipartFields {
    file: Option<FileField>,
}

impl MultipartFields {
    /// Parse all fields from a multipart request
    ///
    /// Parts without a file name (or with an empty one, as browsers send for
    /// an unselected file input) are not files and are ignored.
    pub async fn parse(multipart: &mut Multipart, file_field: &str) -> Result<Self, ApiError> {
        let mut file: Option<FileField> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse multipart: {}", e)))?
        {
            let name = field.name().unwrap_or("").to_string();

            let file_name = match field.file_name() {
                Some(file_name) if !file_name.is_empty() => file_name.to_string(),
                _ => continue,
            };

            if name != file_field || file.is_some() {
                return Err(ApiError::bad_request(format!(
                    "Unexpected field '{}'",
                    name
                )));
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read file: {}", e)))?
                .to_vec();

            file = Some(FileField { data, file_name });
        }

        Ok(Self { file })
    }

    /// Take the uploaded file, if any
    pub fn into_file(self) -> Option<FileField> {
        self.file
    }
}
