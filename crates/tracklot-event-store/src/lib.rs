//! Tracklot Event Store — durable persistence for analytics events.

pub mod pg_event_store;
