//! StartSessionHandler - generates questions and opens a new quiz session.

use std::sync::Arc;

use super::{GenerateQuestionsCommand, GenerateQuestionsHandler, QuizError};
use crate::domain::foundation::Timestamp;
use crate::domain::quiz::{Difficulty, QuizSession};
use crate::ports::QuestionGenerator;

/// Command to start a quiz.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub difficulty: Difficulty,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    questions: GenerateQuestionsHandler,
}

impl StartSessionHandler {
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            questions: GenerateQuestionsHandler::new(generator),
        }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<QuizSession, QuizError> {
        let questions = self
            .questions
            .handle(GenerateQuestionsCommand {
                difficulty: cmd.difficulty,
            })
            .await?;

        let session = QuizSession::start(
            cmd.name.as_deref(),
            cmd.email.as_deref(),
            cmd.difficulty,
            questions,
            Timestamp::now(),
        )?;

        tracing::info!(
            session_id = %session.session_id,
            difficulty = %session.difficulty,
            "Quiz session started"
        );
        Ok(session)
    }
}
