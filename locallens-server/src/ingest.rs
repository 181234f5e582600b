//! Upload ingest
//!
//! Runs one upload through classification, file storage and the record log.
//! Each successful ingest writes exactly one file and appends exactly one
//! record. There is no rollback: if the append fails after the file was
//! written, the file stays on disk without a record.

use chrono::Utc;
use locallens_core::{classify, UploadRecord};

use crate::error::ApiError;
use crate::file_store::FileStore;
use crate::multipart::FileField;
use crate::record_log::RecordLogHandle;

/// Ingest one uploaded file and return the record that was logged.
///
/// Fails with `MissingFile` when `upload` is `None`, before touching any
/// storage. A record log that is not ready yet fails the request before the
/// file is written.
pub async fn ingest_upload(
    file_store: &dyn FileStore,
    record_log: &RecordLogHandle,
    upload: Option<FileField>,
) -> Result<UploadRecord, ApiError> {
    let upload = upload.ok_or(ApiError::MissingFile)?;
    let log = record_log.get()?;

    let insight = classify(&upload.file_name.to_lowercase());

    let stored_name = file_store.put(&upload.data, &upload.file_name).await?;

    let record = UploadRecord::new(stored_name, insight, Utc::now());

    if let Err(e) = log.append(&record).await {
        tracing::error!(
            stored_name = %record.stored_name,
            error = %e,
            "Record append failed, stored file has no record"
        );
        return Err(e.into());
    }

    tracing::info!(
        stored_name = %record.stored_name,
        original_name = %upload.file_name,
        size = upload.data.len(),
        insight = ?insight,
        "Upload analyzed"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use locallens_core::Insight;

    use super::*;
    use crate::file_store::{LocalFileStore, StorageError};
    use crate::record_log::{MemoryRecordLog, RecordLog, RecordLogError};

    fn upload(name: &str) -> Option<FileField> {
        Some(FileField {
            data: b"photo".to_vec(),
            file_name: name.to_string(),
        })
    }

    struct FailingFileStore;

    #[async_trait]
    impl FileStore for FailingFileStore {
        async fn put(&self, _bytes: &[u8], _name: &str) -> Result<String, StorageError> {
            Err(StorageError::NameExhausted(0))
        }
    }

    struct RejectingRecordLog;

    #[async_trait]
    impl RecordLog for RejectingRecordLog {
        async fn append(&self, _record: &UploadRecord) -> Result<(), RecordLogError> {
            Err(RecordLogError::Query("write rejected".to_string()))
        }

        async fn list_all_descending(&self) -> Result<Vec<UploadRecord>, RecordLogError> {
            Ok(Vec::new())
        }

        fn backend(&self) -> &'static str {
            "rejecting"
        }
    }

    #[tokio::test]
    async fn test_ingest_writes_file_and_appends_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        let memory = Arc::new(MemoryRecordLog::new());
        let log = RecordLogHandle::ready(memory.clone());

        let record = ingest_upload(&store, &log, upload("Menu.PNG")).await.unwrap();

        assert_eq!(record.insight, Insight::FoodMenu.message());
        assert!(dir.path().join(&record.stored_name).is_file());
        assert_eq!(memory.list_all_descending().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_missing_file_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().join("uploads"));
        let memory = Arc::new(MemoryRecordLog::new());
        let log = RecordLogHandle::ready(memory.clone());

        let err = ingest_upload(&store, &log, None).await.unwrap_err();

        assert!(matches!(err, ApiError::MissingFile));
        assert!(memory.is_empty().await);
        assert!(!dir.path().join("uploads").exists());
    }

    #[tokio::test]
    async fn test_pending_log_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().join("uploads"));
        let log = RecordLogHandle::pending();

        let err = ingest_upload(&store, &log, upload("sign.jpg")).await.unwrap_err();

        assert!(matches!(err, ApiError::Persistence(RecordLogError::NotReady)));
        assert!(!dir.path().join("uploads").exists());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates_without_record() {
        let memory = Arc::new(MemoryRecordLog::new());
        let log = RecordLogHandle::ready(memory.clone());

        let err = ingest_upload(&FailingFileStore, &log, upload("sign.jpg"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Storage(_)));
        assert!(memory.is_empty().await);
    }

    #[tokio::test]
    async fn test_append_failure_leaves_orphaned_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        let log = RecordLogHandle::ready(Arc::new(RejectingRecordLog));

        let err = ingest_upload(&store, &log, upload("flower.jpg"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Persistence(RecordLogError::Query(_))));
        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }
}
