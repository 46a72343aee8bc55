//! API error type shared by the HTTP modules.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::QuizError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::quiz::SessionError;
use crate::ports::RenderError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code, e.g. `QUESTION_NOT_FOUND`.
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        DomainError::new(code, message).into()
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message,
            details: err.details,
        }
    }
}

/// A domain error paired with the status it is served under.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: DomainError,
}

impl ApiError {
    pub fn new(status: StatusCode, error: DomainError) -> Self {
        Self { status, error }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::new(ErrorCode::InternalError, message),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

fn session_status(err: &SessionError) -> StatusCode {
    match err {
        SessionError::QuestionNotFound(_) => StatusCode::NOT_FOUND,
        SessionError::OptionNotFound { .. } | SessionError::Validation(_) => {
            StatusCode::BAD_REQUEST
        }
        SessionError::AlreadyAnswered(_)
        | SessionError::AlreadyCompleted
        | SessionError::Incomplete { .. }
        | SessionError::NotCompleted => StatusCode::CONFLICT,
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        Self::new(session_status(&err), err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err.into())
    }
}

impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Generation(e) => {
                tracing::warn!(domain = e.domain(), error = %e, "Question generation failed");
                let error = DomainError::new(
                    ErrorCode::QuestionGenerationFailed,
                    format!("Failed to generate questions: {}", e),
                )
                .with_detail("domain", e.domain());
                Self::new(StatusCode::BAD_GATEWAY, error)
            }
            QuizError::Session(e) => e.into(),
            QuizError::Validation(e) => e.into(),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = %self.error, "Request failed");
        }
        (self.status, Json(ErrorResponse::from(self.error))).into_response()
    }
}
