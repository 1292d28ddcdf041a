//! Shared application state.

use std::sync::Arc;

use tracklot_core::clock::Clock;
use tracklot_core::store::EventStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of `createdAt` timestamps.
    pub clock: Arc<dyn Clock>,
    /// Durable append-only storage for accepted events.
    pub event_store: Arc<dyn EventStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, event_store: Arc<dyn EventStore>) -> Self {
        Self { clock, event_store }
    }
}
