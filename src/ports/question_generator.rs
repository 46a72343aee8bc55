//! Question Generator Port - produces one scenario question per quiz domain.

use async_trait::async_trait;

use super::AIError;
use crate::domain::foundation::ValidationError;
use crate::domain::quiz::{Difficulty, Question, QuizDomain};

/// Port for generating quiz questions.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Generate a validated question for `domain` at `difficulty`.
    async fn generate(
        &self,
        domain: &QuizDomain,
        difficulty: Difficulty,
    ) -> Result<Question, GenerationError>;
}

/// Question generation errors. Each names the domain that failed.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The model call itself failed.
    #[error("AI provider failed for domain '{domain}': {source}")]
    Provider {
        domain: String,
        #[source]
        source: AIError,
    },

    /// The model replied without any JSON object.
    #[error("No JSON found in response for domain '{domain}'")]
    NoJson { domain: String },

    /// The JSON could not be read as a question.
    #[error("Could not parse JSON for domain '{domain}': {reason}")]
    Malformed { domain: String, reason: String },

    /// The question was read but breaks a structural rule.
    #[error("Invalid question for domain '{domain}': {source}")]
    Invalid {
        domain: String,
        #[source]
        source: ValidationError,
    },
}

impl GenerationError {
    /// Name of the domain whose question failed.
    pub fn domain(&self) -> &str {
        match self {
            GenerationError::Provider { domain, .. }
            | GenerationError::NoJson { domain }
            | GenerationError::Malformed { domain, .. }
            | GenerationError::Invalid { domain, .. } => domain,
        }
    }

    /// True when retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::Provider { source, .. } => source.is_retryable(),
            // a fresh sample from the model may well be well-formed
            GenerationError::NoJson { .. }
            | GenerationError::Malformed { .. }
            | GenerationError::Invalid { .. } => true,
        }
    }
}
