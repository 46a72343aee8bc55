//! The fixed catalogue of quiz domains.
//!
//! Every quiz asks exactly one question per domain, in catalogue order. The
//! domain id doubles as the question id.

use super::Difficulty;

/// A workplace topic area that one question is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizDomain {
    pub id: u32,
    pub name: &'static str,
    pub easy_focus: &'static str,
    pub hard_focus: &'static str,
}

impl QuizDomain {
    /// The aspect of the domain a question of this difficulty should explore.
    pub fn focus(&self, difficulty: Difficulty) -> &'static str {
        match difficulty {
            Difficulty::Easy => self.easy_focus,
            Difficulty::Hard => self.hard_focus,
        }
    }

    /// All domains in question order.
    pub fn all() -> &'static [QuizDomain] {
        &DOMAINS
    }

    /// Looks up a domain by id.
    pub fn by_id(id: u32) -> Option<&'static QuizDomain> {
        DOMAINS.iter().find(|d| d.id == id)
    }
}

static DOMAINS: [QuizDomain; 8] = [
    QuizDomain {
        id: 1,
        name: "Email & meetings",
        easy_focus: "Summaries, followups, scheduling",
        hard_focus: "Decision traceability, interpretation risk",
    },
    QuizDomain {
        id: 2,
        name: "Productivity",
        easy_focus: "Reminders, drafting, automation",
        hard_focus: "Dependency, cognitive load, behavior shifts",
    },
    QuizDomain {
        id: 3,
        name: "Collaboration",
        easy_focus: "Suggested replies, tagging, sharing",
        hard_focus: "Ownership, politics, trust in shared outputs",
    },
    QuizDomain {
        id: 4,
        name: "Learning",
        easy_focus: "Summaries, search, assistants",
        hard_focus: "Expertise erosion, bias, shallow learning",
    },
    QuizDomain {
        id: 5,
        name: "Customer interaction",
        easy_focus: "Draft responses, personalization",
        hard_focus: "Brand risk, escalation, emotional nuance",
    },
    QuizDomain {
        id: 6,
        name: "Decision support",
        easy_focus: "Dashboards, recommendations",
        hard_focus: "Metric distortion, over-trust, incentives",
    },
    QuizDomain {
        id: 7,
        name: "Company workflows",
        easy_focus: "Approvals, policy checks",
        hard_focus: "Power shifts, compliance interpretation",
    },
    QuizDomain {
        id: 8,
        name: "Future of work",
        easy_focus: "Role automation ideas",
        hard_focus: "Role redesign, leverage, org structure",
    },
];
