//! Named tracking helpers over the generic `track_event` primitive.

use serde_json::json;
use tracklot_core::envelope::{EventEnvelope, event_name};

use crate::dispatcher::Dispatcher;

/// The sole way UI code records activity.
///
/// Each `track_*` method is a thin wrapper over [`track_event`]: it packs
/// its action-specific values into the envelope metadata and makes exactly
/// one dispatcher invocation. New event types get a new named wrapper; the
/// primitive's contract never changes.
///
/// Every method completes without error regardless of transport outcome, so
/// callers may await for timing or drop the future entirely.
///
/// [`track_event`]: AnalyticsClient::track_event
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    dispatcher: Dispatcher,
}

fn build_envelope(
    event: &str,
    domain_id: &str,
    user_id: Option<&str>,
    metadata: Option<serde_json::Value>,
) -> EventEnvelope {
    EventEnvelope {
        domain_id: domain_id.to_owned(),
        user_id: user_id.map(str::to_owned),
        event: event.to_owned(),
        metadata,
    }
}

impl AnalyticsClient {
    /// Creates a client targeting the server at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            dispatcher: Dispatcher::new(base_url),
        }
    }

    /// Creates a client over an existing dispatcher.
    #[must_use]
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// The generic tracking primitive: one envelope, one dispatch.
    pub async fn track_event(
        &self,
        event: &str,
        domain_id: &str,
        user_id: Option<&str>,
        metadata: Option<serde_json::Value>,
    ) {
        let envelope = build_envelope(event, domain_id, user_id, metadata);
        self.dispatcher.dispatch(&envelope).await;
    }

    /// A domain landing page was viewed.
    pub async fn track_page_view(&self, domain_id: &str, user_id: Option<&str>) {
        self.track_event(event_name::PAGE_VIEW, domain_id, user_id, None)
            .await;
    }

    /// A domain listing was clicked.
    pub async fn track_domain_click(&self, domain_id: &str, user_id: Option<&str>) {
        self.track_event(event_name::DOMAIN_CLICK, domain_id, user_id, None)
            .await;
    }

    /// An offer was made; `amount` is carried in the metadata.
    pub async fn track_offer_made(&self, domain_id: &str, user_id: Option<&str>, amount: &str) {
        self.track_event(
            event_name::OFFER_MADE,
            domain_id,
            user_id,
            Some(json!({ "amount": amount })),
        )
        .await;
    }

    /// The buy button was clicked.
    pub async fn track_buy_click(&self, domain_id: &str, user_id: Option<&str>) {
        self.track_event(event_name::BUY_CLICK, domain_id, user_id, None)
            .await;
    }

    /// A message was sent to the seller.
    pub async fn track_message_sent(&self, domain_id: &str, user_id: Option<&str>) {
        self.track_event(event_name::MESSAGE_SENT, domain_id, user_id, None)
            .await;
    }

    /// A listing was added to a watchlist.
    pub async fn track_watchlist_add(&self, domain_id: &str, user_id: Option<&str>) {
        self.track_event(event_name::WATCHLIST_ADD, domain_id, user_id, None)
            .await;
    }

    /// A deal was created; the deal identifier is carried in the metadata.
    pub async fn track_deal_created(&self, domain_id: &str, user_id: Option<&str>, deal_id: &str) {
        self.track_event(
            event_name::DEAL_CREATED,
            domain_id,
            user_id,
            Some(json!({ "dealId": deal_id })),
        )
        .await;
    }
}
