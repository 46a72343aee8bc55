//! Profile enum: the six AI thinking profiles and their static signal clusters.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Signal;

/// An AI thinking profile assigned to a completed quiz.
///
/// Declaration order is significant: [`Profile::all`] is the order used to
/// break ties between equal cluster scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    #[serde(rename = "Systems Thinker")]
    SystemsThinker,
    #[serde(rename = "Adoption Realist")]
    AdoptionRealist,
    #[serde(rename = "Trust-Focused Operator")]
    TrustFocusedOperator,
    #[serde(rename = "Human-Centered Technologist")]
    HumanCenteredTechnologist,
    #[serde(rename = "Workflow Optimizer")]
    WorkflowOptimizer,
    #[serde(rename = "Strategic Observer")]
    StrategicObserver,
}

impl Profile {
    /// Returns all profiles in declaration (tie-break) order.
    pub fn all() -> &'static [Profile] {
        &[
            Profile::SystemsThinker,
            Profile::AdoptionRealist,
            Profile::TrustFocusedOperator,
            Profile::HumanCenteredTechnologist,
            Profile::WorkflowOptimizer,
            Profile::StrategicObserver,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Profile::SystemsThinker => "Systems Thinker",
            Profile::AdoptionRealist => "Adoption Realist",
            Profile::TrustFocusedOperator => "Trust-Focused Operator",
            Profile::HumanCenteredTechnologist => "Human-Centered Technologist",
            Profile::WorkflowOptimizer => "Workflow Optimizer",
            Profile::StrategicObserver => "Strategic Observer",
        }
    }

    /// The two signals whose counts make up this profile's cluster score.
    pub fn cluster(&self) -> [Signal; 2] {
        match self {
            Profile::SystemsThinker => [Signal::SystemsThinking, Signal::ContextAwareness],
            Profile::AdoptionRealist => [Signal::Adoption, Signal::HumanBehavior],
            Profile::TrustFocusedOperator => [Signal::Trust, Signal::Efficiency],
            Profile::HumanCenteredTechnologist => {
                [Signal::HumanBehavior, Signal::ContextAwareness]
            }
            Profile::WorkflowOptimizer => [Signal::Efficiency, Signal::SystemsThinking],
            Profile::StrategicObserver => [Signal::SystemsThinking, Signal::Trust],
        }
    }

    /// One-sentence description shown with the result.
    pub fn description(&self) -> &'static str {
        match self {
            Profile::SystemsThinker => {
                "Understands how AI interacts with workflows, incentives, and context."
            }
            Profile::AdoptionRealist => {
                "Focuses on whether people will actually use AI in practice."
            }
            Profile::TrustFocusedOperator => {
                "Prioritizes reliability, accountability, and confidence in outputs."
            }
            Profile::HumanCenteredTechnologist => {
                "Evaluates AI through behavior, communication, and user comfort."
            }
            Profile::WorkflowOptimizer => {
                "Looks for efficiency gains and tangible value from AI integration."
            }
            Profile::StrategicObserver => {
                "Considers long-term organizational and decision impact of AI."
            }
        }
    }

    /// Description phrased about a named person, e.g. "Ada understands how AI ...".
    pub fn personalized_description(&self, name: &str) -> String {
        let description = self.description();
        let mut chars = description.chars();
        match chars.next() {
            Some(first) => format!("{} {}{}", name, first.to_lowercase(), chars.as_str()),
            None => name.to_string(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
