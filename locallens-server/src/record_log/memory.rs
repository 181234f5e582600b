//! In-memory record log
//!
//! Development fallback when no database is configured. Records are lost on
//! restart.

use async_trait::async_trait;
use locallens_core::{sort_descending, UploadRecord};
use tokio::sync::RwLock;

use super::{RecordLog, RecordLogError};

/// Record log kept in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryRecordLog {
    records: RwLock<Vec<UploadRecord>>,
}

impl MemoryRecordLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordLog for MemoryRecordLog {
    async fn append(&self, record: &UploadRecord) -> Result<(), RecordLogError> {
        let mut records = self.records.write().await;

        // Same uniqueness rule as the insight_logs table
        if records.iter().any(|r| r.stored_name == record.stored_name) {
            return Err(RecordLogError::Query(format!(
                "duplicate stored name '{}'",
                record.stored_name
            )));
        }

        records.push(record.clone());
        Ok(())
    }

    async fn list_all_descending(&self) -> Result<Vec<UploadRecord>, RecordLogError> {
        let mut records: Vec<UploadRecord> =
            self.records.read().await.iter().rev().cloned().collect();
        sort_descending(&mut records);
        Ok(records)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use locallens_core::Insight;

    #[tokio::test]
    async fn test_append_then_list() {
        let log = MemoryRecordLog::new();
        assert!(log.is_empty().await);

        let record = UploadRecord::new("1-a-menu.png", Insight::FoodMenu, Utc::now());
        log.append(&record).await.unwrap();

        assert_eq!(log.len().await, 1);
        assert_eq!(log.list_all_descending().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let log = MemoryRecordLog::new();
        let t0 = Utc::now();

        // Inserted out of timestamp order on purpose
        for (name, offset) in [("b", 1), ("a", 0), ("c", 2)] {
            let record =
                UploadRecord::new(name, Insight::Landmark, t0 + Duration::seconds(offset));
            log.append(&record).await.unwrap();
        }

        let names: Vec<_> = log
            .list_all_descending()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.stored_name)
            .collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_equal_timestamps_newest_insert_first() {
        let log = MemoryRecordLog::new();
        let t = Utc::now();

        log.append(&UploadRecord::new("first", Insight::Landmark, t))
            .await
            .unwrap();
        log.append(&UploadRecord::new("second", Insight::Landmark, t))
            .await
            .unwrap();

        let list = log.list_all_descending().await.unwrap();
        assert_eq!(list[0].stored_name, "second");
        assert_eq!(list[1].stored_name, "first");
    }

    #[tokio::test]
    async fn test_duplicate_stored_name_rejected() {
        let log = MemoryRecordLog::new();
        let record = UploadRecord::new("same", Insight::Landmark, Utc::now());

        log.append(&record).await.unwrap();
        let err = log.append(&record).await.unwrap_err();

        assert!(matches!(err, RecordLogError::Query(_)));
        assert_eq!(log.len().await, 1);
    }
}
