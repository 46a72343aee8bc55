//! Errors returned by quiz handlers.

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::quiz::SessionError;
use crate::ports::GenerationError;

/// Quiz handler errors.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Question generation failed for at least one domain.
    #[error("Failed to generate questions: {0}")]
    Generation(#[from] GenerationError),

    /// A session transition was rejected.
    #[error("{0}")]
    Session(#[from] SessionError),

    /// Request data failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl QuizError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::Generation(_) => ErrorCode::QuestionGenerationFailed,
            QuizError::Session(err) => err.code(),
            QuizError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}
