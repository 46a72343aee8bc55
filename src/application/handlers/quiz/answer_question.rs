//! AnswerQuestionHandler - records one answer and looks up its reveal.

use super::QuizError;
use crate::domain::profiling::{Answer, Reveal, RevealCatalog};
use crate::domain::quiz::QuizSession;

/// Command to answer one question of a client-held session.
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    pub session: QuizSession,
    pub question_id: u32,
    pub option_id: String,
}

/// Result of recording an answer.
#[derive(Debug, Clone)]
pub struct AnswerQuestionResult {
    pub session: QuizSession,
    pub answer: Answer,
    pub reveal: &'static Reveal,
    pub remaining: usize,
}

/// Handler for answering questions.
#[derive(Debug, Default)]
pub struct AnswerQuestionHandler;

impl AnswerQuestionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: AnswerQuestionCommand) -> Result<AnswerQuestionResult, QuizError> {
        let mut session = cmd.session;
        let answer = session.record_answer(cmd.question_id, &cmd.option_id)?;

        let domain = session
            .question(answer.question_id)
            .map(|q| q.domain.as_str())
            .unwrap_or_default();
        let reveal = RevealCatalog::for_domain(domain, &answer.signals);
        let remaining = session.remaining();

        tracing::debug!(
            session_id = %session.session_id,
            question_id = answer.question_id,
            reveal = reveal.key.as_str(),
            remaining,
            "Answer recorded"
        );

        Ok(AnswerQuestionResult {
            session,
            answer,
            reveal,
            remaining,
        })
    }
}
