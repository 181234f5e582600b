//! PostgreSQL implementation of the record log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use locallens_core::UploadRecord;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};

use super::{RecordLog, RecordLogError};

/// PostgreSQL-backed record log over the `insight_logs` table.
#[derive(Clone)]
pub struct PostgresRecordLog {
    pool: PgPool,
}

/// Row type for database queries.
#[derive(FromRow)]
struct InsightLogRow {
    stored_name: String,
    insight: String,
    recorded_at: DateTime<Utc>,
}

impl From<InsightLogRow> for UploadRecord {
    fn from(row: InsightLogRow) -> Self {
        Self {
            stored_name: row.stored_name,
            insight: row.insight,
            timestamp: row.recorded_at,
        }
    }
}

impl PostgresRecordLog {
    /// Connect to the database and run migrations.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, RecordLogError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| RecordLogError::Connection(e.to_string()))?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!("Record log connected and migrations applied");

        Ok(Self { pool })
    }
}

#[async_trait]
impl RecordLog for PostgresRecordLog {
    async fn append(&self, record: &UploadRecord) -> Result<(), RecordLogError> {
        sqlx::query(
            r#"
            INSERT INTO insight_logs (stored_name, insight, recorded_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&record.stored_name)
        .bind(&record.insight)
        .bind(record.timestamp)
        .execute(&self.pool)
        .await?;

        tracing::debug!(stored_name = %record.stored_name, "Appended upload record");

        Ok(())
    }

    async fn list_all_descending(&self) -> Result<Vec<UploadRecord>, RecordLogError> {
        let rows: Vec<InsightLogRow> = sqlx::query_as(
            r#"
            SELECT stored_name, insight, recorded_at
            FROM insight_logs
            ORDER BY recorded_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use locallens_core::{stored_name, Insight};

    async fn connect() -> PostgresRecordLog {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        PostgresRecordLog::connect(&url, 2).await.unwrap()
    }

    // Postgres keeps microseconds
    fn now_micros() -> DateTime<Utc> {
        DateTime::from_timestamp_micros(Utc::now().timestamp_micros()).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_list_orders_by_time_then_insertion() {
        let log = connect().await;
        let at = now_micros();

        let older = UploadRecord::new(
            stored_name(at, "older.jpg"),
            Insight::Landmark,
            at - Duration::seconds(1),
        );
        let first = UploadRecord::new(stored_name(at, "first.jpg"), Insight::FoodMenu, at);
        let second = UploadRecord::new(stored_name(at, "second.jpg"), Insight::StreetSign, at);

        for record in [&older, &first, &second] {
            log.append(record).await.unwrap();
        }

        let ours: Vec<String> = log
            .list_all_descending()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.stored_name)
            .filter(|n| [&older, &first, &second].iter().any(|r| &r.stored_name == n))
            .collect();

        assert_eq!(
            ours,
            vec![
                second.stored_name.clone(),
                first.stored_name.clone(),
                older.stored_name.clone()
            ]
        );
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_duplicate_stored_name_rejected() {
        let log = connect().await;
        let at = now_micros();
        let record = UploadRecord::new(stored_name(at, "dup.jpg"), Insight::NativeFlower, at);

        log.append(&record).await.unwrap();
        let err = log.append(&record).await.unwrap_err();

        assert!(matches!(err, RecordLogError::Query(_)));
    }
}
