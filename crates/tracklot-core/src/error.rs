//! Tracking error taxonomy.

use thiserror::Error;

/// Errors the ingestion path can produce.
///
/// Transport failures on the client send path are not represented here:
/// the dispatcher suppresses them by contract, so they never cross an API
/// boundary as a value.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// A required envelope field is missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// The event store failed to persist or read a record.
    #[error("storage error: {0}")]
    Storage(String),
}
