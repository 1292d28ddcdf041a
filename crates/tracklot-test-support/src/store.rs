//! Test stores — mock `EventStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tracklot_core::envelope::StoredEventRecord;
use tracklot_core::error::TrackingError;
use tracklot_core::store::EventStore;

/// An event store that records every appended record in memory and serves
/// reads from what was appended. Starts empty.
#[derive(Debug, Default)]
pub struct RecordingEventStore {
    appended: Mutex<Vec<StoredEventRecord>>,
}

impl RecordingEventStore {
    /// Create a new, empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all records that were appended, in append order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_records(&self) -> Vec<StoredEventRecord> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventStore for RecordingEventStore {
    async fn append(&self, record: &StoredEventRecord) -> Result<(), TrackingError> {
        self.appended.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn events_for_domain(
        &self,
        domain_id: &str,
    ) -> Result<Vec<StoredEventRecord>, TrackingError> {
        let mut records: Vec<StoredEventRecord> = self
            .appended
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.domain_id == domain_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }
}

/// An event store that always returns a storage error. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingEventStore;

#[async_trait]
impl EventStore for FailingEventStore {
    async fn append(&self, _record: &StoredEventRecord) -> Result<(), TrackingError> {
        Err(TrackingError::Storage("connection refused".into()))
    }

    async fn events_for_domain(
        &self,
        _domain_id: &str,
    ) -> Result<Vec<StoredEventRecord>, TrackingError> {
        Err(TrackingError::Storage("connection refused".into()))
    }
}
