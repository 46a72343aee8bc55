//! SessionSummary - the flat record handed to the session sink.

use serde::{Deserialize, Serialize};

use super::{Question, QuizSession};
use crate::domain::profiling::{Answer, RevealCatalog};

/// One spreadsheet row describing a session.
///
/// Every field is a plain string; missing optional values are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub name: String,
    pub email: String,
    pub difficulty: String,
    pub ai_profile: String,
    pub certificate_id: String,
    pub geography: String,
    pub started_at: String,
    pub completed_at: String,
    pub linked_in_clicked: String,
    pub questions_and_options: String,
    pub answers_and_reveals: String,
}

impl SessionSummary {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            session_id: session.session_id.to_string(),
            name: session.name.clone(),
            email: session.email.clone().unwrap_or_default(),
            difficulty: session.difficulty.to_string(),
            ai_profile: session
                .ai_profile
                .map(|p| p.display_name().to_string())
                .unwrap_or_default(),
            certificate_id: session
                .certificate_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            geography: session
                .geography
                .as_ref()
                .map(|g| g.to_string())
                .unwrap_or_default(),
            started_at: session.created_at.to_rfc3339(),
            completed_at: session
                .completed_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            linked_in_clicked: (if session.linked_in_clicked { "Yes" } else { "No" }).to_string(),
            questions_and_options: questions_and_options(&session.questions),
            answers_and_reveals: answers_and_reveals(&session.questions, &session.answers),
        }
    }
}

fn questions_and_options(questions: &[Question]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let options: Vec<String> = q
                .options
                .iter()
                .map(|o| format!("  {}) {}", o.id.to_uppercase(), o.text))
                .collect();
            format!("Q{} [{}]: {}\n{}", i + 1, q.domain, q.scenario, options.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn answers_and_reveals(questions: &[Question], answers: &[Answer]) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
                return format!("Q{}: No data", i + 1);
            };
            let option = question.option(&answer.selected_option_id);
            let option_text = option
                .map(|o| o.text.as_str())
                .unwrap_or(answer.selected_option_id.as_str());
            let reveal_text = option
                .map(|o| RevealCatalog::for_domain(&question.domain, &o.signals).sheet_text())
                .unwrap_or_default();

            format!(
                "Q{} [{}]:\n  Answer: \"{}\"\n  Reveal: {}",
                i + 1,
                question.domain,
                option_text,
                reveal_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
