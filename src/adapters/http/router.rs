//! Application router: every module router plus the shared layers.

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::certificate::certificate_router;
use super::profile::profile_router;
use super::quiz::quiz_router;
use super::state::AppState;
use crate::config::ServerConfig;

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the CORS layer. No configured origins allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Creates the full application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(quiz_router())
        .merge(profile_router())
        .merge(certificate_router())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}
