//! HTTP handlers for profile endpoints.
//!
//! Scoring is pure, so these handlers need no state.

use axum::extract::Json;

use crate::domain::profiling::{Profile, ProfileAssigner, Reveal, RevealCatalog};

use super::dto::{ProfileInfo, ProfileResultResponse, RevealRequest, ScoreAnswersRequest};

/// GET /api/profiles - The six profiles in tie-break order
pub async fn list_profiles() -> Json<Vec<ProfileInfo>> {
    Json(Profile::all().iter().copied().map(ProfileInfo::from).collect())
}

/// POST /api/profile - Score answers into a profile
pub async fn score_answers(Json(request): Json<ScoreAnswersRequest>) -> Json<ProfileResultResponse> {
    let assignment = ProfileAssigner::assign_user_profile(&request.answers);

    Json(ProfileResultResponse {
        profile: assignment.profile,
        description: assignment.profile.description(),
        signal_scores: assignment.signal_scores,
        cluster_scores: ProfileAssigner::cluster_scores(&assignment.signal_scores),
    })
}

/// POST /api/reveal - Reveal bundle for a selected option's signals
pub async fn reveal(Json(request): Json<RevealRequest>) -> Json<&'static Reveal> {
    if let Some(domain) = request.domain.as_deref() {
        tracing::debug!(domain, signals = ?request.signals, "Reveal lookup");
    }
    Json(RevealCatalog::for_raw_signals(&request.signals))
}
