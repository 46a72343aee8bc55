//! HTTP DTOs for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::profiling::{Answer, ClusterScore, Profile, Signal, SignalScoreMap};

/// One entry of the profile catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub name: Profile,
    pub signals: [Signal; 2],
    pub description: &'static str,
}

impl From<Profile> for ProfileInfo {
    fn from(profile: Profile) -> Self {
        Self {
            name: profile,
            signals: profile.cluster(),
            description: profile.description(),
        }
    }
}

/// Request to score a list of answers.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreAnswersRequest {
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResultResponse {
    pub profile: Profile,
    pub description: &'static str,
    pub signal_scores: SignalScoreMap,
    pub cluster_scores: Vec<ClusterScore>,
}

/// Request for the reveal bundle of a selected option.
///
/// Signals stay raw strings: an unrecognised first signal falls back to the
/// trust bundle instead of failing the request.
#[derive(Debug, Clone, Deserialize)]
pub struct RevealRequest {
    #[serde(default)]
    pub signals: Vec<String>,
    #[serde(default)]
    pub domain: Option<String>,
}
