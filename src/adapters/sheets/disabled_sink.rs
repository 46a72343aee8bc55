//! Sink used when no webhook URL is configured.

use async_trait::async_trait;

use crate::domain::quiz::SessionSummary;
use crate::ports::{SessionSink, SinkError};

/// Drops every summary with a warning and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSessionSink;

#[async_trait]
impl SessionSink for DisabledSessionSink {
    async fn persist(&self, summary: &SessionSummary) -> Result<(), SinkError> {
        tracing::warn!(
            session_id = %summary.session_id,
            "Sheets webhook URL not set, session not saved"
        );
        Ok(())
    }
}
