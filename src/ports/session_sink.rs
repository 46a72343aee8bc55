//! Session Sink Port - hands session summaries to external storage.

use async_trait::async_trait;

use crate::domain::quiz::SessionSummary;

/// Port for persisting session summaries.
///
/// Callers treat persistence as best effort: a failure is logged and never
/// surfaced to the quiz taker.
#[async_trait]
pub trait SessionSink: Send + Sync {
    async fn persist(&self, summary: &SessionSummary) -> Result<(), SinkError>;
}

/// Session sink errors.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The sink answered with a non-success status.
    #[error("sink rejected session: status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request never completed.
    #[error("sink unreachable: {0}")]
    Transport(String),
}
