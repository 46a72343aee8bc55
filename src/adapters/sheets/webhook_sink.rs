//! Spreadsheet webhook sink.
//!
//! POSTs each session summary as JSON to a spreadsheet script endpoint
//! (for example a Google Apps Script web app), which appends it as a row.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::quiz::SessionSummary;
use crate::ports::{SessionSink, SinkError};

/// Session sink backed by an HTTP webhook.
pub struct WebhookSessionSink {
    client: Client,
    url: String,
}

impl WebhookSessionSink {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SinkError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SessionSink for WebhookSessionSink {
    async fn persist(&self, summary: &SessionSummary) -> Result<(), SinkError> {
        let response = self
            .client
            .post(&self.url)
            .json(summary)
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(session_id = %summary.session_id, "Session saved to sheet");
        Ok(())
    }
}
