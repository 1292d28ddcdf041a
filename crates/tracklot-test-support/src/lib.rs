//! Shared test mocks and utilities for the Tracklot analytics subsystem.

mod clock;
mod store;

pub use clock::FixedClock;
pub use store::{FailingEventStore, RecordingEventStore};
