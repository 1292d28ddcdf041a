//! Tracklot API — HTTP ingestion surface for analytics events.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod state;

/// Builds the application router. Shared by `main` and the integration
/// tests so both serve the exact same route structure.
pub fn app(app_state: state::AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/analytics", routes::track::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
