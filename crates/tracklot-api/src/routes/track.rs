//! The analytics ingestion endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use tracklot_core::envelope::{EventEnvelope, StoredEventRecord};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /track.
///
/// Every field is optional at the deserialization layer so that a missing
/// `domainId`/`event` produces this subsystem's own 400 response rather
/// than the framework's 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    /// Identifier of the subject domain listing.
    #[serde(default)]
    pub domain_id: Option<String>,
    /// Identifier of the acting user; absent for anonymous events.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Event name tag. Open string; unknown tags are accepted as-is so new
    /// event types can ship client-first.
    #[serde(default)]
    pub event: Option<String>,
    /// Event-specific payload, persisted verbatim.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl TrackRequest {
    fn into_envelope(self) -> EventEnvelope {
        EventEnvelope {
            domain_id: self.domain_id.unwrap_or_default(),
            user_id: self.user_id,
            event: self.event.unwrap_or_default(),
            metadata: self.metadata,
        }
    }
}

/// POST /track
///
/// Validates the envelope, assigns `id` and `createdAt`, and appends exactly
/// one record. Duplicate submissions produce duplicate records by design.
#[instrument(skip(state, request))]
async fn track_event(
    State(state): State<AppState>,
    Json(request): Json<TrackRequest>,
) -> Result<Json<StoredEventRecord>, ApiError> {
    let envelope = request.into_envelope();
    envelope.validate()?;

    let record = envelope.into_record(Uuid::new_v4(), state.clock.now());

    info!(record_id = %record.id, event = %record.event, domain_id = %record.domain_id,
        "tracking analytics event");

    state.event_store.append(&record).await?;

    Ok(Json(record))
}

/// Returns the router for the analytics context.
pub fn router() -> Router<AppState> {
    Router::new().route("/track", post(track_event))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use tower::ServiceExt;
    use tracklot_core::store::EventStore;
    use tracklot_test_support::{FailingEventStore, FixedClock, RecordingEventStore};

    fn app_state_with(event_store: Arc<dyn EventStore>) -> AppState {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        AppState::new(clock, event_store)
    }

    async fn post_track(store: Arc<dyn EventStore>, body: &Value) -> (StatusCode, Value) {
        let app = router().with_state(app_state_with(store));

        let request = Request::builder()
            .method("POST")
            .uri("/track")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();

        (status, json)
    }

    #[tokio::test]
    async fn test_track_returns_200_with_stored_record() {
        // Arrange
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({
            "domainId": "domain-1",
            "userId": "user-1",
            "event": "OFFER_MADE",
            "metadata": { "amount": "500" },
        });

        // Act
        let (status, json) = post_track(store.clone(), &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        Uuid::parse_str(json["id"].as_str().unwrap()).unwrap();
        assert_eq!(json["domainId"], "domain-1");
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["event"], "OFFER_MADE");
        assert_eq!(json["metadata"]["amount"], "500");
        assert!(json["createdAt"].is_string());

        let appended = store.appended_records();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].event, "OFFER_MADE");
    }

    #[tokio::test]
    async fn test_track_accepts_anonymous_event_without_metadata() {
        // Arrange
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({ "domainId": "domain-1", "event": "PAGE_VIEW" });

        // Act
        let (status, json) = post_track(store.clone(), &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["userId"], Value::Null);
        assert_eq!(json["metadata"], Value::Null);
        assert_eq!(store.appended_records().len(), 1);
    }

    #[tokio::test]
    async fn test_track_accepts_unknown_event_tag() {
        // Arrange
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({ "domainId": "domain-1", "event": "LANDING_THEME_CHANGED" });

        // Act
        let (status, json) = post_track(store, &body).await;

        // Assert — the tag enumeration is open, unknown strings are stored as-is.
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["event"], "LANDING_THEME_CHANGED");
    }

    #[tokio::test]
    async fn test_track_returns_400_for_empty_body() {
        // Arrange
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({});

        // Act
        let (status, json) = post_track(store.clone(), &body).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing required fields");
        assert!(store.appended_records().is_empty());
    }

    #[tokio::test]
    async fn test_track_returns_400_for_missing_domain_id() {
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({ "event": "PAGE_VIEW" });

        let (status, json) = post_track(store.clone(), &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing required fields");
        assert!(store.appended_records().is_empty());
    }

    #[tokio::test]
    async fn test_track_returns_400_for_missing_event() {
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({ "domainId": "domain-1" });

        let (status, json) = post_track(store.clone(), &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing required fields");
        assert!(store.appended_records().is_empty());
    }

    #[tokio::test]
    async fn test_track_returns_400_for_empty_string_fields() {
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({ "domainId": "", "event": "" });

        let (status, json) = post_track(store.clone(), &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing required fields");
        assert!(store.appended_records().is_empty());
    }

    #[tokio::test]
    async fn test_track_returns_500_when_store_fails() {
        // Arrange
        let body = serde_json::json!({ "domainId": "domain-1", "event": "BUY_CLICK" });

        // Act
        let (status, json) = post_track(Arc::new(FailingEventStore), &body).await;

        // Assert — internal detail is withheld from the response body.
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to track analytics");
        assert!(json.get("detail").is_none());
    }

    #[tokio::test]
    async fn test_track_assigns_clock_timestamp() {
        // Arrange
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({ "domainId": "domain-1", "event": "PAGE_VIEW" });

        // Act
        let (_, json) = post_track(store, &body).await;

        // Assert — createdAt comes from the injected clock.
        let created_at = json["createdAt"].as_str().unwrap();
        assert!(created_at.starts_with("2026-01-15T10:00:00"));
    }

    #[tokio::test]
    async fn test_duplicate_submissions_produce_distinct_ids() {
        // Arrange
        let store = Arc::new(RecordingEventStore::new());
        let body = serde_json::json!({ "domainId": "domain-1", "event": "PAGE_VIEW" });

        // Act — same envelope twice; no idempotency key exists.
        let (_, first) = post_track(store.clone(), &body).await;
        let (_, second) = post_track(store.clone(), &body).await;

        // Assert
        assert_ne!(first["id"], second["id"]);
        assert_eq!(store.appended_records().len(), 2);
    }
}
