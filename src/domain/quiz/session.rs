//! QuizSession aggregate - one run through the quiz.
//!
//! The session is carried by the client between requests, so answers coming
//! back are re-checked against the session's questions before any transition:
//! one answer per question, a known option, and exactly that option's signals.
//! The profile is always recomputed here.

use serde::{Deserialize, Serialize};

use super::{Difficulty, Geography, Question, SessionError, SessionSummary};
use crate::domain::foundation::{CertificateId, SessionId, Timestamp, ValidationError};
use crate::domain::profiling::{Answer, Profile, ProfileAssigner, ProfileAssignment};

/// Name recorded when the user leaves it blank.
pub const ANONYMOUS: &str = "Anonymous";

/// A user's quiz run: generated questions, answers so far and the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    pub session_id: SessionId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<CertificateId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography: Option<Geography>,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(default)]
    pub linked_in_clicked: bool,
}

impl QuizSession {
    /// Starts a new session over freshly generated questions.
    ///
    /// A blank name becomes [`ANONYMOUS`]; a blank email is dropped.
    pub fn start(
        name: Option<&str>,
        email: Option<&str>,
        difficulty: Difficulty,
        questions: Vec<Question>,
        now: Timestamp,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions").into());
        }

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS)
            .to_string();
        let email = email
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        Ok(Self {
            session_id: SessionId::new(),
            name,
            email,
            difficulty,
            questions,
            answers: Vec::new(),
            ai_profile: None,
            certificate_id: None,
            geography: None,
            created_at: now,
            completed_at: None,
            linked_in_clicked: false,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn question(&self, question_id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.answers.iter().any(|a| a.question_id == question_id)
    }

    /// First question without an answer, in question order.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.iter().find(|q| !self.is_answered(q.id))
    }

    /// Number of questions still to answer.
    pub fn remaining(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| !self.is_answered(q.id))
            .count()
    }

    /// Records the option the user picked.
    ///
    /// The answer's signals are copied from the stored option.
    pub fn record_answer(
        &mut self,
        question_id: u32,
        option_id: &str,
    ) -> Result<Answer, SessionError> {
        if self.is_completed() {
            return Err(SessionError::AlreadyCompleted);
        }
        self.validate_answers()?;
        let question = self
            .question(question_id)
            .ok_or(SessionError::QuestionNotFound(question_id))?;
        let option = question
            .option(option_id)
            .ok_or_else(|| SessionError::option_not_found(question_id, option_id))?;
        if self.is_answered(question_id) {
            return Err(SessionError::AlreadyAnswered(question_id));
        }

        let answer = Answer::new(question_id, option.id.clone(), option.signals.clone());
        self.answers.push(answer.clone());
        Ok(answer)
    }

    /// Checks the carried answers against the stored questions.
    ///
    /// Each answer must name a question of this session at most once, pick
    /// one of its options, and carry that option's signals unchanged.
    pub fn validate_answers(&self) -> Result<(), SessionError> {
        for (index, answer) in self.answers.iter().enumerate() {
            let question_id = answer.question_id;
            let question = self.question(question_id).ok_or_else(|| {
                ValidationError::invalid_format(
                    "answers",
                    format!("answer references unknown question {}", question_id),
                )
            })?;
            if self.answers[..index]
                .iter()
                .any(|a| a.question_id == question_id)
            {
                return Err(ValidationError::invalid_format(
                    "answers",
                    format!("question {} answered more than once", question_id),
                )
                .into());
            }
            let option = question
                .option(&answer.selected_option_id)
                .ok_or_else(|| {
                    SessionError::option_not_found(question_id, answer.selected_option_id.as_str())
                })?;
            if answer.signals != option.signals {
                return Err(ValidationError::invalid_format(
                    "answers",
                    format!(
                        "signals for question {} do not match option '{}'",
                        question_id, option.id
                    ),
                )
                .into());
            }
        }
        Ok(())
    }

    /// Validates the answers and, once completed, that the stored profile is
    /// the one those answers produce.
    pub fn verify_integrity(&self) -> Result<(), SessionError> {
        self.validate_answers()?;
        if let Some(profile) = self.ai_profile {
            let expected = ProfileAssigner::assign_user_profile(&self.answers).profile;
            if profile != expected {
                return Err(ValidationError::invalid_format(
                    "aiProfile",
                    format!("does not match the recorded answers ({})", expected.display_name()),
                )
                .into());
            }
        }
        Ok(())
    }

    /// Fails unless the session is open, its answers are genuine and every
    /// question is answered.
    pub fn ensure_completable(&self) -> Result<(), SessionError> {
        if self.is_completed() {
            return Err(SessionError::AlreadyCompleted);
        }
        self.validate_answers()?;
        let remaining = self.remaining();
        if remaining > 0 {
            return Err(SessionError::Incomplete {
                answered: self.questions.len() - remaining,
                total: self.questions.len(),
            });
        }
        Ok(())
    }

    /// Scores the answers and finalizes the session.
    pub fn complete(
        &mut self,
        geography: Geography,
        now: Timestamp,
    ) -> Result<ProfileAssignment, SessionError> {
        self.ensure_completable()?;

        let assignment = ProfileAssigner::assign_user_profile(&self.answers);
        self.ai_profile = Some(assignment.profile);
        self.certificate_id = Some(CertificateId::generate());
        self.geography = Some(geography).filter(|g| !g.is_empty());
        self.completed_at = Some(now);
        Ok(assignment)
    }

    /// Records that the user shared the result on LinkedIn.
    pub fn mark_linkedin_shared(&mut self) -> Result<(), SessionError> {
        if !self.is_completed() {
            return Err(SessionError::NotCompleted);
        }
        self.verify_integrity()?;
        self.linked_in_clicked = true;
        Ok(())
    }

    /// Flat record for the persistence sink.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_session(self)
    }
}
