//! Route configuration for certificate endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::download_certificate;
use crate::adapters::http::state::AppState;

/// Creates the certificate router.
pub fn certificate_router() -> Router<AppState> {
    Router::new().route("/api/certificate", post(download_certificate))
}
