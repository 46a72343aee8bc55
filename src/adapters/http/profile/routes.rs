//! HTTP routes for profile endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_profiles, reveal, score_answers};
use crate::adapters::http::state::AppState;

/// Creates the profile router.
pub fn profile_router() -> Router<AppState> {
    Router::new()
        .route("/api/profiles", get(list_profiles))
        .route("/api/profile", post(score_answers))
        .route("/api/reveal", post(reveal))
}
