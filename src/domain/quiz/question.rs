//! Generated quiz questions and their answer options.

use serde::{Deserialize, Serialize};

use super::{Difficulty, QuizDomain};
use crate::domain::foundation::ValidationError;
use crate::domain::profiling::Signal;

/// Number of options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// One selectable answer to a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

impl QuestionOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, signals: Vec<Signal>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            signals,
        }
    }
}

/// A scenario question for one quiz domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub domain: String,
    pub difficulty: Difficulty,
    pub scenario: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Builds a validated question for `domain`.
    pub fn new(
        domain: &QuizDomain,
        difficulty: Difficulty,
        scenario: impl Into<String>,
        options: Vec<QuestionOption>,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            id: domain.id,
            domain: domain.name.to_string(),
            difficulty,
            scenario: scenario.into(),
            options,
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks the structural rules: a non-empty scenario and exactly four
    /// options with distinct, non-empty ids and non-empty text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scenario.trim().is_empty() {
            return Err(ValidationError::empty_field("scenario"));
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(ValidationError::wrong_count(
                "options",
                OPTIONS_PER_QUESTION,
                self.options.len(),
            ));
        }
        for (index, option) in self.options.iter().enumerate() {
            if option.id.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("options[{}].id", index)));
            }
            if option.text.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("options[{}].text", index)));
            }
            if self.options[..index].iter().any(|o| o.id == option.id) {
                return Err(ValidationError::invalid_format(
                    "options",
                    format!("duplicate option id '{}'", option.id),
                ));
            }
        }
        Ok(())
    }

    /// Finds an option by id.
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
