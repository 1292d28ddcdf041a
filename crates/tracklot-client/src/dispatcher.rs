//! Transport for event envelopes.

use std::time::Duration;

use tracing::{debug, warn};
use tracklot_core::envelope::EventEnvelope;

/// Path of the ingestion endpoint, relative to the configured base URL.
const INGEST_PATH: &str = "/api/analytics/track";

/// Default bound on a single send; there is no retry on top of it.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends envelopes to the ingestion endpoint as JSON POSTs.
///
/// Failure handling is the whole point of this type: any transport error or
/// non-2xx response is logged and discarded, so a dispatch always completes
/// without error from the caller's perspective. A failed send is simply
/// lost; there is no retry, queueing, or offline buffering.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: reqwest::Client,
    ingest_url: String,
}

impl Dispatcher {
    /// Creates a dispatcher targeting the server at `base_url` with the
    /// default request timeout.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a dispatcher with an explicit request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            ingest_url: format!("{}{INGEST_PATH}", base_url.trim_end_matches('/')),
        }
    }

    /// Posts one envelope. Always completes; the failure channel is routed
    /// to the log and discarded.
    pub async fn dispatch(&self, envelope: &EventEnvelope) {
        match self.http.post(&self.ingest_url).json(envelope).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(event = %envelope.event, domain_id = %envelope.domain_id,
                    "analytics event dispatched");
            }
            Ok(response) => {
                warn!(event = %envelope.event, status = %response.status(),
                    "analytics ingest rejected event");
            }
            Err(err) => {
                warn!(event = %envelope.event, error = %err, "analytics dispatch failed");
            }
        }
    }
}
