//! Reveal catalog - fixed explanatory text shown after an answer.

use serde::Serialize;

use super::Signal;

/// Identifies one of the six reveal bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RevealKey {
    TrustFocus,
    AdoptionFocus,
    EfficiencyFocus,
    ContextFocus,
    SystemsFocus,
    HumanFocus,
}

impl RevealKey {
    /// Wire name of the bundle, e.g. `efficiencyFocus`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealKey::TrustFocus => "trustFocus",
            RevealKey::AdoptionFocus => "adoptionFocus",
            RevealKey::EfficiencyFocus => "efficiencyFocus",
            RevealKey::ContextFocus => "contextFocus",
            RevealKey::SystemsFocus => "systemsFocus",
            RevealKey::HumanFocus => "humanFocus",
        }
    }
}

/// Three-part text shown after the user picks an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub key: RevealKey,
    pub encouragement: &'static str,
    pub rationale: &'static str,
    pub context: &'static str,
}

impl Reveal {
    /// All three parts joined by dashes, as written to the session sheet.
    pub fn sheet_text(&self) -> String {
        format!("{} — {} — {}", self.encouragement, self.rationale, self.context)
    }
}

static TRUST_FOCUS: Reveal = Reveal {
    key: RevealKey::TrustFocus,
    encouragement: "Great instinct! AI frameworks need people who focus on reliability and trust.",
    rationale: "When tools get details wrong, confidence drops quickly in the real world.",
    context: "In reality, adoption usually depends on trust, control, authenticity, and visible value working together.",
};

static ADOPTION_FOCUS: Reveal = Reveal {
    key: RevealKey::AdoptionFocus,
    encouragement: "Smart thinking! Adoption depends on real human behavior, not just features.",
    rationale: "People decide whether to use AI based on friction, habit, and perceived value.",
    context: "In reality, tools succeed when they fit naturally into workflows and social dynamics.",
};

static EFFICIENCY_FOCUS: Reveal = Reveal {
    key: RevealKey::EfficiencyFocus,
    encouragement: "Solid perspective. Efficiency matters when it's measurable and real.",
    rationale: "The best AI wins aren't always about speed—they're about the right kind of value.",
    context: "In reality, organizations care about efficiency, but it's one factor among many.",
};

static CONTEXT_FOCUS: Reveal = Reveal {
    key: RevealKey::ContextFocus,
    encouragement: "Thoughtful approach. Context shapes how AI is actually used.",
    rationale: "The same tool works differently depending on incentives, culture, and constraints.",
    context: "In reality, success requires understanding the specific conditions where people work.",
};

static SYSTEMS_FOCUS: Reveal = Reveal {
    key: RevealKey::SystemsFocus,
    encouragement: "Sharp thinking. Systems-level effects matter more than individual features.",
    rationale: "Small changes in how AI is deployed can cascade through workflows and behaviors.",
    context: "In reality, the biggest AI wins come from rethinking the whole system, not just automating tasks.",
};

static HUMAN_FOCUS: Reveal = Reveal {
    key: RevealKey::HumanFocus,
    encouragement: "Insightful choice. Human factors drive real outcomes.",
    rationale: "Comfort, clarity, and control matter as much as capability.",
    context: "In reality, people make or break AI adoption through how they interpret and act on outputs.",
};

/// Lookup of reveal bundles by the first signal of an option.
pub struct RevealCatalog;

impl RevealCatalog {
    /// Bundle for a single signal.
    pub fn for_signal(signal: Signal) -> &'static Reveal {
        match signal {
            Signal::Trust => &TRUST_FOCUS,
            Signal::Adoption => &ADOPTION_FOCUS,
            Signal::Efficiency => &EFFICIENCY_FOCUS,
            Signal::ContextAwareness => &CONTEXT_FOCUS,
            Signal::SystemsThinking => &SYSTEMS_FOCUS,
            Signal::HumanBehavior => &HUMAN_FOCUS,
        }
    }

    /// Bundle for an option's signal list.
    ///
    /// Only the first signal is consulted; later signals on multi-tag options
    /// are ignored. An empty list falls back to the trust bundle.
    pub fn for_signals(signals: &[Signal]) -> &'static Reveal {
        signals
            .first()
            .map(|signal| Self::for_signal(*signal))
            .unwrap_or(&TRUST_FOCUS)
    }

    /// Same as [`RevealCatalog::for_signals`] for untyped tags.
    ///
    /// An unrecognized first tag falls back to the trust bundle.
    pub fn for_raw_signals<S: AsRef<str>>(signals: &[S]) -> &'static Reveal {
        signals
            .first()
            .and_then(|raw| raw.as_ref().parse::<Signal>().ok())
            .map(Self::for_signal)
            .unwrap_or(&TRUST_FOCUS)
    }

    /// Bundle for an answer within a quiz domain.
    ///
    /// Every domain currently shares the generic bundles.
    pub fn for_domain(_domain: &str, signals: &[Signal]) -> &'static Reveal {
        Self::for_signals(signals)
    }
}
