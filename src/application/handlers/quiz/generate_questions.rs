//! GenerateQuestionsHandler - one question per quiz domain, generated concurrently.

use futures::future::try_join_all;
use std::sync::Arc;

use super::QuizError;
use crate::domain::quiz::{Difficulty, Question, QuizDomain};
use crate::ports::QuestionGenerator;

/// Command to generate a full question set.
#[derive(Debug, Clone, Copy)]
pub struct GenerateQuestionsCommand {
    pub difficulty: Difficulty,
}

/// Handler for generating the quiz questions.
pub struct GenerateQuestionsHandler {
    generator: Arc<dyn QuestionGenerator>,
}

impl GenerateQuestionsHandler {
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self { generator }
    }

    /// Requests every domain at once and waits for all of them.
    ///
    /// The first failure fails the whole set; no partial set is returned.
    pub async fn handle(&self, cmd: GenerateQuestionsCommand) -> Result<Vec<Question>, QuizError> {
        let requests = QuizDomain::all()
            .iter()
            .map(|domain| self.generator.generate(domain, cmd.difficulty));

        let questions = try_join_all(requests).await.map_err(|err| {
            tracing::error!(
                domain = err.domain(),
                error = %err,
                difficulty = %cmd.difficulty,
                "Question generation failed"
            );
            err
        })?;

        tracing::info!(
            count = questions.len(),
            difficulty = %cmd.difficulty,
            "Generated question set"
        );
        Ok(questions)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domain::quiz::session::fixtures;
    use crate::ports::GenerationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Serves fixture questions, optionally failing for one domain id.
    pub struct StubQuestionGenerator {
        fail_domain: Option<u32>,
        pub requested: Mutex<Vec<u32>>,
    }

    impl StubQuestionGenerator {
        pub fn new() -> Self {
            Self {
                fail_domain: None,
                requested: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_on(domain_id: u32) -> Self {
            Self {
                fail_domain: Some(domain_id),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl QuestionGenerator for StubQuestionGenerator {
        async fn generate(
            &self,
            domain: &QuizDomain,
            difficulty: Difficulty,
        ) -> Result<Question, GenerationError> {
            self.requested.lock().unwrap().push(domain.id);
            if self.fail_domain == Some(domain.id) {
                return Err(GenerationError::NoJson {
                    domain: domain.name.to_string(),
                });
            }
            Ok(fixtures::questions(difficulty)
                .into_iter()
                .find(|q| q.id == domain.id)
                .unwrap())
        }
    }
}
