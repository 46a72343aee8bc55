//! Scripted AI provider for tests and offline runs.
//!
//! Replies are consumed in order; once the script runs out every call gets the
//! fallback reply. Prompts are recorded so tests can inspect what was sent.
//!
//! ```ignore
//! let provider = MockAIProvider::replying(r#"{"scenario": "...", "options": [...]}"#)
//!     .then_fail(AIError::Unauthorized);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::ports::{AIError, AIProvider, Completion, Prompt};

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Fail(AIError),
}

/// Mock AI provider.
pub struct MockAIProvider {
    script: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    delay: Option<Duration>,
    prompts: Mutex<Vec<Prompt>>,
}

impl MockAIProvider {
    pub const MODEL: &'static str = "mock-model";

    /// A provider that answers every prompt with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_fallback(MockReply::Text(text.into()))
    }

    /// A provider that fails every prompt with `error`.
    pub fn failing(error: AIError) -> Self {
        Self::with_fallback(MockReply::Fail(error))
    }

    fn with_fallback(fallback: MockReply) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            delay: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queues a reply ahead of the fallback.
    pub fn then_reply(self, text: impl Into<String>) -> Self {
        self.push(MockReply::Text(text.into()))
    }

    /// Queues a failure ahead of the fallback.
    pub fn then_fail(self, error: AIError) -> Self {
        self.push(MockReply::Fail(error))
    }

    /// Sleeps before every reply.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }

    fn push(self, reply: MockReply) -> Self {
        self.script.lock().unwrap().push_back(reply);
        self
    }

    fn next_reply(&self) -> MockReply {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, AIError> {
        self.prompts.lock().unwrap().push(prompt.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.next_reply() {
            MockReply::Text(text) => Ok(Completion {
                text,
                model: Self::MODEL.to_string(),
                truncated: false,
                tokens_used: None,
            }),
            MockReply::Fail(err) => Err(err),
        }
    }

    fn model(&self) -> &str {
        Self::MODEL
    }
}
