//! OpenAI chat completions adapter.
//!
//! Sends one system + user message pair per prompt. Transient failures (429,
//! 5xx, transport errors, timeouts) are retried up to `max_retries` times with
//! doubling backoff; a `Retry-After` header lengthens the wait when present.

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AIError, AIProvider, Completion, Prompt};

/// Connection settings for the OpenAI API.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    api_key: Secret<String>,
    model: String,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    backoff: Duration,
}

impl OpenAIConfig {
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-mini";
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 2,
            backoff: Duration::from_secs(1),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the adapter at another OpenAI-compatible server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry budget and the first backoff delay.
    pub fn with_retries(mut self, max_retries: u32, backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.backoff = backoff;
        self
    }
}

/// [`AIProvider`] backed by the OpenAI chat completions endpoint.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
    endpoint: String,
}

impl OpenAIProvider {
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::Transport(format!("failed to build HTTP client: {}", e)))?;
        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        Ok(Self {
            config,
            client,
            endpoint,
        })
    }

    fn request_body<'a>(&'a self, prompt: &'a Prompt) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &prompt.user,
        });

        ChatRequest {
            model: &self.config.model,
            messages,
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        }
    }

    /// One round trip, no retries.
    async fn attempt(&self, prompt: &Prompt) -> Result<Completion, AIError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout(self.config.timeout)
                } else {
                    AIError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, retry_after, body));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AIError::BadReply(e.to_string()))?;
        body.into_completion()
    }

    fn backoff_for(&self, attempt: u32, err: &AIError) -> Duration {
        let doubled = self.config.backoff.saturating_mul(1 << attempt.min(16));
        match err {
            AIError::RateLimited(Some(wait)) => doubled.max(*wait),
            _ => doubled,
        }
    }
}

fn status_error(status: StatusCode, retry_after: Option<Duration>, body: String) -> AIError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => AIError::RateLimited(retry_after),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AIError::Unauthorized,
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => {
            AIError::Rejected(body)
        }
        _ => AIError::Upstream {
            status: status.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, AIError> {
        let mut attempt = 0;
        loop {
            match self.attempt(prompt).await {
                Ok(completion) => {
                    tracing::debug!(
                        model = %completion.model,
                        tokens = ?completion.tokens_used,
                        truncated = completion.truncated,
                        "OpenAI completion received"
                    );
                    return Ok(completion);
                }
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    let wait = self.backoff_for(attempt, &err);
                    tracing::warn!(
                        error = %err,
                        attempt = attempt + 1,
                        wait_ms = wait.as_millis() as u64,
                        "OpenAI request failed, retrying"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: String,
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

impl ChatResponse {
    fn into_completion(self) -> Result<Completion, AIError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::BadReply("no choices".to_string()))?;
        let text = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AIError::BadReply("empty message".to_string()))?;

        Ok(Completion {
            text,
            model: self.model,
            truncated: choice.finish_reason.as_deref() == Some("length"),
            tokens_used: self.usage.map(|u| u.total_tokens),
        })
    }
}
