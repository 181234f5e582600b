//! Upload record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::Insight;

/// Metadata logged for one completed upload.
///
/// Records are written once at the end of a successful ingest and never
/// modified afterwards. The photo bytes are not part of the record; they live
/// in the file store under `stored_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    /// Unique name the photo bytes are stored and served under
    pub stored_name: String,
    /// Classifier output for the upload
    pub insight: String,
    /// Ingest time, the sort key for history
    pub timestamp: DateTime<Utc>,
}

impl UploadRecord {
    pub fn new(stored_name: impl Into<String>, insight: Insight, timestamp: DateTime<Utc>) -> Self {
        Self {
            stored_name: stored_name.into(),
            insight: insight.message().to_string(),
            timestamp,
        }
    }
}

/// Order records most recent first.
///
/// The sort is stable, so records sharing a timestamp keep their relative
/// order. Callers holding records in insertion order should reverse them first
/// to get newest-insert-first among equal timestamps.
pub fn sort_descending(records: &mut [UploadRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
