//! HTTP handlers for quiz endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    AnswerQuestionCommand, CompleteSessionCommand, GenerateQuestionsCommand, SaveSessionCommand,
    ShareSessionCommand, StartSessionCommand,
};

use super::dto::{
    AnswerQuestionRequest, AnswerQuestionResponse, CompleteSessionResponse,
    GenerateQuestionsRequest, QuestionsResponse, SaveSessionResponse, SessionRequest,
    ShareSessionResponse, StartSessionRequest,
};
use crate::adapters::http::client_ip::ClientIp;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// POST /api/questions - Generate one question per domain
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let questions = state
        .generate_questions_handler()
        .handle(GenerateQuestionsCommand {
            difficulty: request.difficulty,
        })
        .await?;

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/sessions - Start a session with freshly generated questions
pub async fn start_session(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .start_session_handler()
        .handle(StartSessionCommand {
            name: request.name,
            email: request.email,
            difficulty: request.difficulty,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/sessions/answer - Record one answer and return its reveal
pub async fn answer_question(
    State(state): State<AppState>,
    Json(request): Json<AnswerQuestionRequest>,
) -> Result<Json<AnswerQuestionResponse>, ApiError> {
    let result = state.answer_question_handler().handle(AnswerQuestionCommand {
        session: request.session,
        question_id: request.question_id,
        option_id: request.option_id,
    })?;

    Ok(Json(AnswerQuestionResponse {
        session: result.session,
        answer: result.answer,
        reveal: result.reveal,
        remaining: result.remaining,
    }))
}

/// POST /api/sessions/complete - Score the session and issue a certificate id
pub async fn complete_session(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Json(request): Json<SessionRequest>,
) -> Result<Json<CompleteSessionResponse>, ApiError> {
    let result = state
        .complete_session_handler()
        .handle(CompleteSessionCommand {
            session: request.session,
            client_ip,
        })
        .await?;

    let profile = result.assignment.profile;
    Ok(Json(CompleteSessionResponse {
        profile,
        description: profile.description(),
        signal_scores: result.assignment.signal_scores,
        cluster_scores: result.cluster_scores,
        certificate_id: result.session.certificate_id.clone(),
        geography: result.session.geography.clone(),
        session: result.session,
    }))
}

/// POST /api/sessions/save - Persist the session summary in the background
pub async fn save_session(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<SaveSessionResponse>, ApiError> {
    let result = state.save_session_handler().handle(SaveSessionCommand {
        session: request.session,
    })?;

    Ok(Json(SaveSessionResponse {
        success: true,
        session_id: result.session_id.to_string(),
    }))
}

/// POST /api/sessions/share - Build the LinkedIn post and record the share
pub async fn share_session(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<ShareSessionResponse>, ApiError> {
    let result = state.share_session_handler().handle(ShareSessionCommand {
        session: request.session,
    })?;

    Ok(Json(ShareSessionResponse {
        text: result.share.text,
        url: result.share.url,
        session: result.session,
    }))
}
