//! Quiz session error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by [`QuizSession`](super::QuizSession) transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No question with this id in the session.
    QuestionNotFound(u32),
    /// The question exists but has no option with this id.
    OptionNotFound { question_id: u32, option_id: String },
    /// The question already has an answer.
    AlreadyAnswered(u32),
    /// The session has already been completed.
    AlreadyCompleted,
    /// Completion requested before every question was answered.
    Incomplete { answered: usize, total: usize },
    /// Operation requires a completed session.
    NotCompleted,
    /// Session data failed validation.
    Validation(ValidationError),
}

impl SessionError {
    pub fn option_not_found(question_id: u32, option_id: impl Into<String>) -> Self {
        SessionError::OptionNotFound {
            question_id,
            option_id: option_id.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            SessionError::OptionNotFound { .. } => ErrorCode::OptionNotFound,
            SessionError::AlreadyAnswered(_) => ErrorCode::QuestionAlreadyAnswered,
            SessionError::AlreadyCompleted => ErrorCode::SessionAlreadyCompleted,
            SessionError::Incomplete { .. } => ErrorCode::SessionIncomplete,
            SessionError::NotCompleted => ErrorCode::SessionNotCompleted,
            SessionError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::QuestionNotFound(id) => format!("Question not found: {}", id),
            SessionError::OptionNotFound {
                question_id,
                option_id,
            } => format!(
                "Option '{}' not found on question {}",
                option_id, question_id
            ),
            SessionError::AlreadyAnswered(id) => format!("Question {} already answered", id),
            SessionError::AlreadyCompleted => "Session already completed".to_string(),
            SessionError::Incomplete { answered, total } => format!(
                "Session incomplete: {} of {} questions answered",
                answered, total
            ),
            SessionError::NotCompleted => "Session has not been completed".to_string(),
            SessionError::Validation(err) => err.to_string(),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Validation(err)
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Validation(inner) => inner.into(),
            other => DomainError::new(other.code(), other.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_shared_error_codes() {
        assert_eq!(
            SessionError::QuestionNotFound(3).code(),
            ErrorCode::QuestionNotFound
        );
        assert_eq!(
            SessionError::Incomplete { answered: 2, total: 8 }.code(),
            ErrorCode::SessionIncomplete
        );
        assert_eq!(
            SessionError::from(ValidationError::empty_field("questions")).code(),
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn message_names_the_option() {
        let err = SessionError::option_not_found(2, "z");
        assert_eq!(err.to_string(), "Option 'z' not found on question 2");
    }

    #[test]
    fn converts_into_domain_error() {
        let err: DomainError = SessionError::AlreadyCompleted.into();
        assert_eq!(err.code(), ErrorCode::SessionAlreadyCompleted);
        assert_eq!(err.message(), "Session already completed");
    }

    #[test]
    fn validation_failure_keeps_field_detail() {
        let err: DomainError =
            SessionError::from(ValidationError::invalid_format("answers", "forged")).into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field").map(String::as_str), Some("answers"));
    }
}
