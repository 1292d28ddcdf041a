//! Tracklot Client — fire-and-forget analytics emission.
//!
//! UI code records activity exclusively through [`AnalyticsClient`]: one
//! named helper per tracked action, each building an event envelope and
//! handing it to the dispatcher. Transport failures are logged and
//! suppressed so tracking can never disturb the primary user flow.

mod dispatcher;
mod emitter;

pub use dispatcher::Dispatcher;
pub use emitter::AnalyticsClient;
