//! Event store abstraction.

use async_trait::async_trait;

use crate::envelope::StoredEventRecord;
use crate::error::TrackingError;

/// Append-only storage for analytics events.
///
/// Each append is a single independent write; no transaction spans multiple
/// records and no deduplication is performed, so duplicate submissions
/// produce duplicate records.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist one record. Exactly one row per call.
    async fn append(&self, record: &StoredEventRecord) -> Result<(), TrackingError>;

    /// Load all records for a domain listing, ordered by `created_at`.
    /// Consumed by downstream reporting; ingestion never reads back its
    /// own writes.
    async fn events_for_domain(
        &self,
        domain_id: &str,
    ) -> Result<Vec<StoredEventRecord>, TrackingError>;
}
