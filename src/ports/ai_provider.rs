//! AI Provider Port - single-turn chat completions from a language model.
//!
//! Question generation only ever sends one prompt and reads one reply, so the
//! port is deliberately narrow: a [`Prompt`] in, a [`Completion`] out.

use async_trait::async_trait;
use std::time::Duration;

/// Port for language model completions.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Sends the prompt and returns the model's reply.
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, AIError>;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;
}

/// A single-turn prompt with its sampling settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// Optional system instruction sent before the user message.
    pub system: Option<String>,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Prompt {
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 700;

    /// A user prompt with default sampling.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            system: None,
            user: text.into(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_system(mut self, text: impl Into<String>) -> Self {
        self.system = Some(text.into());
        self
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }
}

/// The model's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// Model that actually answered (providers may pin a dated snapshot).
    pub model: String,
    /// True when generation stopped at the token limit.
    pub truncated: bool,
    pub tokens_used: Option<u32>,
}

/// AI provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AIError {
    /// HTTP 429. Carries the provider's requested wait when it sent one.
    #[error("rate limited by provider")]
    RateLimited(Option<Duration>),

    /// The provider failed on its side (5xx or an unexpected status).
    #[error("provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("provider rejected the API key")]
    Unauthorized,

    /// The provider refused the request as malformed.
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("no reply within {0:?}")]
    Timeout(Duration),

    /// The reply arrived but carried no usable text.
    #[error("unreadable reply: {0}")]
    BadReply(String),
}

impl AIError {
    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AIError::RateLimited(_) | AIError::Transport(_) | AIError::Timeout(_) => true,
            AIError::Upstream { status, .. } => *status >= 500,
            AIError::Unauthorized | AIError::Rejected(_) | AIError::BadReply(_) => false,
        }
    }
}
