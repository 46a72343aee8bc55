//! SaveSessionHandler - exports a session summary without blocking the caller.

use std::sync::Arc;
use tokio::task::JoinHandle;

use super::QuizError;
use crate::domain::foundation::SessionId;
use crate::domain::quiz::QuizSession;
use crate::ports::{SessionSink, SinkError};

/// Command to save a session.
#[derive(Debug, Clone)]
pub struct SaveSessionCommand {
    pub session: QuizSession,
}

/// Result of scheduling a save.
#[derive(Debug)]
pub struct SaveSessionResult {
    pub session_id: SessionId,
    /// The detached export task. Dropping it does not cancel the export.
    pub task: JoinHandle<()>,
}

/// Handler for saving sessions to the configured sink.
#[derive(Clone)]
pub struct SaveSessionHandler {
    sink: Arc<dyn SessionSink>,
}

impl SaveSessionHandler {
    pub fn new(sink: Arc<dyn SessionSink>) -> Self {
        Self { sink }
    }

    /// Schedules the export on a background task and returns immediately.
    ///
    /// A session whose answers or profile do not hold up is refused before
    /// anything is scheduled. Sink failures are logged and never reported.
    pub fn handle(&self, cmd: SaveSessionCommand) -> Result<SaveSessionResult, QuizError> {
        cmd.session.verify_integrity()?;
        let session_id = cmd.session.session_id;
        let handler = self.clone();

        let task = tokio::spawn(async move {
            if let Err(err) = handler.persist(&cmd.session).await {
                tracing::error!(
                    session_id = %session_id,
                    error = %err,
                    "Failed to save session"
                );
            }
        });

        Ok(SaveSessionResult { session_id, task })
    }

    /// Exports the session and waits for the sink.
    pub async fn persist(&self, session: &QuizSession) -> Result<(), SinkError> {
        self.sink.persist(&session.summary()).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domain::quiz::SessionSummary;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records summaries; optionally rejects them all.
    #[derive(Default)]
    pub struct RecordingSink {
        pub saved: Mutex<Vec<SessionSummary>>,
        pub fail: bool,
    }

    impl RecordingSink {
        pub fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl SessionSink for RecordingSink {
        async fn persist(&self, summary: &SessionSummary) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Rejected {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            self.saved.lock().unwrap().push(summary.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingSink;
    use super::*;
    use crate::domain::profiling::Signal;
    use crate::domain::quiz::session::fixtures;
    use crate::domain::quiz::SessionError;

    #[tokio::test]
    async fn exports_summary_in_background() {
        let sink = Arc::new(RecordingSink::default());
        let handler = SaveSessionHandler::new(sink.clone());
        let session = fixtures::session();

        let result = handler
            .handle(SaveSessionCommand {
                session: session.clone(),
            })
            .unwrap();
        assert_eq!(result.session_id, session.session_id);

        result.task.await.unwrap();
        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].session_id, session.session_id.to_string());
    }

    #[tokio::test]
    async fn sink_failure_is_absorbed() {
        let handler = SaveSessionHandler::new(Arc::new(RecordingSink::failing()));

        let result = handler
            .handle(SaveSessionCommand {
                session: fixtures::session(),
            })
            .unwrap();

        assert!(result.task.await.is_ok());
    }

    #[tokio::test]
    async fn forged_answers_are_not_exported() {
        let sink = Arc::new(RecordingSink::default());
        let handler = SaveSessionHandler::new(sink.clone());
        let mut session = fixtures::answered_with("b");
        session.answers[4].signals.push(Signal::Trust);

        let err = handler.handle(SaveSessionCommand { session }).unwrap_err();

        assert!(matches!(err, QuizError::Session(SessionError::Validation(_))));
        tokio::task::yield_now().await;
        assert!(sink.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn persist_surfaces_sink_errors() {
        let handler = SaveSessionHandler::new(Arc::new(RecordingSink::failing()));
        assert!(handler.persist(&fixtures::session()).await.is_err());
    }
}
