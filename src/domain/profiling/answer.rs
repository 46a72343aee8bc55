//! Answer - one recorded option selection with the signals it carried.

use serde::{Deserialize, Serialize};

use super::Signal;

/// A user's answer to a single question.
///
/// `signals` is copied from the chosen option. It may be empty and may repeat
/// a signal; every occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub selected_option_id: String,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

impl Answer {
    /// Creates a new answer.
    pub fn new(question_id: u32, selected_option_id: impl Into<String>, signals: Vec<Signal>) -> Self {
        Self {
            question_id,
            selected_option_id: selected_option_id.into(),
            signals,
        }
    }
}
