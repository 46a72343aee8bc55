//! Request and response types for quiz endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CertificateId;
use crate::domain::profiling::{Answer, ClusterScore, Profile, Reveal, SignalScoreMap};
use crate::domain::quiz::{Difficulty, Geography, Question, QuizSession};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerQuestionRequest {
    pub session: QuizSession,
    pub question_id: u32,
    pub option_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerQuestionResponse {
    pub session: QuizSession,
    pub answer: Answer,
    pub reveal: &'static Reveal,
    /// Questions still unanswered after this one.
    pub remaining: usize,
}

/// Body of the complete, save and share endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest {
    pub session: QuizSession,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSessionResponse {
    pub session: QuizSession,
    pub profile: Profile,
    pub description: &'static str,
    pub signal_scores: SignalScoreMap,
    pub cluster_scores: Vec<ClusterScore>,
    pub certificate_id: Option<CertificateId>,
    pub geography: Option<Geography>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSessionResponse {
    pub success: bool,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareSessionResponse {
    pub text: String,
    pub url: String,
    /// Session with `linkedInClicked` set.
    pub session: QuizSession,
}
