use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::types::ApiError;
use super::v1;

/// Fallback for unmatched routes, so 404s use the JSON error envelope
/// like every other API error
pub async fn fallback_not_found() -> ApiError {
    ApiError::not_found("The requested resource does not exist")
}

/// Create a minimal router without state (for testing)
/// Note: /ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .fallback(fallback_not_found)
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .fallback(fallback_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
