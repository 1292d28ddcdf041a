//! `PostgreSQL` implementation of the `EventStore` trait.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use tracklot_core::envelope::StoredEventRecord;
use tracklot_core::error::TrackingError;
use tracklot_core::store::EventStore;

/// PostgreSQL-backed event store.
#[derive(Debug, Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    /// Creates a new `PgEventStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: &sqlx::Error) -> TrackingError {
    TrackingError::Storage(err.to_string())
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn append(&self, record: &StoredEventRecord) -> Result<(), TrackingError> {
        sqlx::query(
            "INSERT INTO analytics_events (id, domain_id, user_id, event, metadata, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(record.id)
        .bind(&record.domain_id)
        .bind(record.user_id.as_deref())
        .bind(&record.event)
        .bind(record.metadata.as_ref())
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error(&e))?;

        tracing::debug!(record_id = %record.id, event = %record.event, "analytics event appended");
        Ok(())
    }

    async fn events_for_domain(
        &self,
        domain_id: &str,
    ) -> Result<Vec<StoredEventRecord>, TrackingError> {
        let rows = sqlx::query(
            "SELECT id, domain_id, user_id, event, metadata, created_at
             FROM analytics_events
             WHERE domain_id = $1
             ORDER BY created_at, id",
        )
        .bind(domain_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error(&e))?;

        Ok(rows
            .into_iter()
            .map(|row| StoredEventRecord {
                id: row.get("id"),
                domain_id: row.get("domain_id"),
                user_id: row.get("user_id"),
                event: row.get("event"),
                metadata: row.get("metadata"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}
