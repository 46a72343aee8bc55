//! ShareSessionHandler - builds the LinkedIn post and records the click.

use super::{QuizError, SaveSessionCommand, SaveSessionHandler};
use crate::domain::certificate::ShareMessage;
use crate::domain::quiz::{QuizSession, SessionError};

/// Command to share a completed session.
#[derive(Debug, Clone)]
pub struct ShareSessionCommand {
    pub session: QuizSession,
}

/// Result of sharing.
#[derive(Debug, Clone)]
pub struct ShareSessionResult {
    pub session: QuizSession,
    pub share: ShareMessage,
}

/// Handler for LinkedIn sharing.
pub struct ShareSessionHandler {
    save: SaveSessionHandler,
    site_url: String,
}

impl ShareSessionHandler {
    pub fn new(save: SaveSessionHandler, site_url: impl Into<String>) -> Self {
        Self {
            save,
            site_url: site_url.into(),
        }
    }

    /// Marks the session as shared, re-saves it and returns the post.
    pub fn handle(&self, cmd: ShareSessionCommand) -> Result<ShareSessionResult, QuizError> {
        let mut session = cmd.session;
        session.mark_linkedin_shared()?;
        let profile = session.ai_profile.ok_or(SessionError::NotCompleted)?;
        let share = ShareMessage::linkedin(profile, &self.site_url)?;

        self.save.handle(SaveSessionCommand {
            session: session.clone(),
        })?;

        tracing::info!(session_id = %session.session_id, "Session shared to LinkedIn");
        Ok(ShareSessionResult { session, share })
    }
}
