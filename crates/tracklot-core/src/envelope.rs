//! Event envelope and stored record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TrackingError;

/// Well-known event name tags.
///
/// The set is open by design: the ingestion endpoint accepts any non-empty
/// string so new tags can ship client-first without a server change. These
/// constants cover the tags the emitter helpers produce.
pub mod event_name {
    /// A domain landing page was viewed.
    pub const PAGE_VIEW: &str = "PAGE_VIEW";
    /// A domain listing was clicked.
    pub const DOMAIN_CLICK: &str = "DOMAIN_CLICK";
    /// An offer was made on a listing.
    pub const OFFER_MADE: &str = "OFFER_MADE";
    /// The buy button was clicked.
    pub const BUY_CLICK: &str = "BUY_CLICK";
    /// A message was sent to the seller.
    pub const MESSAGE_SENT: &str = "MESSAGE_SENT";
    /// A listing was added to a watchlist.
    pub const WATCHLIST_ADD: &str = "WATCHLIST_ADD";
    /// A deal was created from a listing.
    pub const DEAL_CREATED: &str = "DEAL_CREATED";
}

/// The unit of transport: one tracked user action, as assembled by the
/// emitter and posted to the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    /// Identifier of the subject domain listing.
    pub domain_id: String,
    /// Identifier of the acting user; anonymous events carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Event name tag; open string, see [`event_name`].
    pub event: String,
    /// Event-specific payload, stored verbatim and never interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl EventEnvelope {
    /// Checks the envelope invariant: `domain_id` and `event` are non-empty.
    ///
    /// # Errors
    ///
    /// Returns `TrackingError::Validation` when either field is empty.
    pub fn validate(&self) -> Result<(), TrackingError> {
        if self.domain_id.is_empty() || self.event.is_empty() {
            return Err(TrackingError::Validation(
                "domainId and event are required".to_owned(),
            ));
        }
        Ok(())
    }

    /// Promotes the envelope to a stored record with server-assigned fields.
    #[must_use]
    pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> StoredEventRecord {
        StoredEventRecord {
            id,
            domain_id: self.domain_id,
            user_id: self.user_id,
            event: self.event,
            metadata: self.metadata,
            created_at,
        }
    }
}

/// The envelope plus server-assigned identity and timestamp. Immutable once
/// persisted; this subsystem never updates or deletes records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEventRecord {
    /// Unique record identifier, assigned at persistence time.
    pub id: Uuid,
    /// Identifier of the subject domain listing.
    pub domain_id: String,
    /// Identifier of the acting user, if any.
    pub user_id: Option<String>,
    /// Event name tag.
    pub event: String,
    /// Event-specific payload, stored verbatim.
    pub metadata: Option<serde_json::Value>,
    /// Server-assigned timestamp.
    pub created_at: DateTime<Utc>,
}
