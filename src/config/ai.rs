//! OpenAI settings used to generate quiz scenarios.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// OpenAI configuration used for question generation
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key (required)
    pub openai_api_key: Option<Secret<String>>,

    /// Chat model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion token limit per question
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Seconds per completion request.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Extra attempts after a retryable failure.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl AiConfig {
    /// Per-request HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an OpenAI key is present
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Requires a key and sane sampling values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openai() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("ai.base_url"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    700
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    2
}
