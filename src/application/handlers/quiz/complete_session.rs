//! CompleteSessionHandler - scores a fully answered session.

use std::net::IpAddr;
use std::sync::Arc;

use super::QuizError;
use crate::domain::foundation::Timestamp;
use crate::domain::profiling::{ClusterScore, ProfileAssigner, ProfileAssignment};
use crate::domain::quiz::QuizSession;
use crate::ports::GeoLocator;

/// Command to complete a session.
#[derive(Debug, Clone)]
pub struct CompleteSessionCommand {
    pub session: QuizSession,
    /// Address of the quiz taker, used for the coarse location.
    pub client_ip: Option<IpAddr>,
}

/// Result of completing a session.
#[derive(Debug, Clone)]
pub struct CompleteSessionResult {
    pub session: QuizSession,
    pub assignment: ProfileAssignment,
    pub cluster_scores: Vec<ClusterScore>,
}

/// Handler for completing sessions.
pub struct CompleteSessionHandler {
    geo_locator: Arc<dyn GeoLocator>,
}

impl CompleteSessionHandler {
    pub fn new(geo_locator: Arc<dyn GeoLocator>) -> Self {
        Self { geo_locator }
    }

    pub async fn handle(
        &self,
        cmd: CompleteSessionCommand,
    ) -> Result<CompleteSessionResult, QuizError> {
        let mut session = cmd.session;

        // no lookup for a session that cannot complete
        session.ensure_completable()?;

        let geography = self.geo_locator.lookup(cmd.client_ip).await;
        let assignment = session.complete(geography, Timestamp::now())?;
        let cluster_scores = ProfileAssigner::cluster_scores(&assignment.signal_scores);

        tracing::info!(
            session_id = %session.session_id,
            profile = assignment.profile.display_name(),
            "Quiz session completed"
        );

        Ok(CompleteSessionResult {
            session,
            assignment,
            cluster_scores,
        })
    }
}
