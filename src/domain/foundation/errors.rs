//! Shared error vocabulary: value-object validation failures and the
//! coded `DomainError` every layer can convert into.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Rejection raised while building a value object from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must have {expected} entries, got {actual}")]
    WrongCount {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// `field` was blank after trimming.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// `field` held the wrong number of entries.
    pub fn wrong_count(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::WrongCount {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// `field` was present but malformed.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable, machine-readable error codes shared by every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    QuestionNotFound,
    OptionNotFound,
    QuestionAlreadyAnswered,
    SessionIncomplete,
    SessionAlreadyCompleted,
    SessionNotCompleted,
    QuestionGenerationFailed,
    InternalError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE wire form, e.g. `QUESTION_NOT_FOUND`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::QuestionNotFound => "QUESTION_NOT_FOUND",
            ErrorCode::OptionNotFound => "OPTION_NOT_FOUND",
            ErrorCode::QuestionAlreadyAnswered => "QUESTION_ALREADY_ANSWERED",
            ErrorCode::SessionIncomplete => "SESSION_INCOMPLETE",
            ErrorCode::SessionAlreadyCompleted => "SESSION_ALREADY_COMPLETED",
            ErrorCode::SessionNotCompleted => "SESSION_NOT_COMPLETED",
            ErrorCode::QuestionGenerationFailed => "QUESTION_GENERATION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error shape handed across layer boundaries: a code, a message and
/// optional key/value details (e.g. the offending field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: BTreeMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::WrongCount { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        DomainError::new(ErrorCode::ValidationFailed, err.to_string()).with_detail("field", field)
    }
}
