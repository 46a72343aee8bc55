//! Signal enum: the six behavioral tags attached to answer options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A behavioral signal carried by a quiz answer option.
///
/// The set is closed. Serialized names are the variant names verbatim, so an
/// unknown tag fails deserialization before it can reach scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Signal {
    Trust,
    Adoption,
    Efficiency,
    ContextAwareness,
    HumanBehavior,
    SystemsThinking,
}

impl Signal {
    /// Returns all signals in canonical order.
    pub fn all() -> &'static [Signal] {
        &[
            Signal::Trust,
            Signal::Adoption,
            Signal::Efficiency,
            Signal::ContextAwareness,
            Signal::HumanBehavior,
            Signal::SystemsThinking,
        ]
    }

    /// Returns the wire name of the signal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Trust => "Trust",
            Signal::Adoption => "Adoption",
            Signal::Efficiency => "Efficiency",
            Signal::ContextAwareness => "ContextAwareness",
            Signal::HumanBehavior => "HumanBehavior",
            Signal::SystemsThinking => "SystemsThinking",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Signal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signal::all()
            .iter()
            .find(|signal| signal.as_str() == s)
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("signal", format!("unknown signal '{}'", s)))
    }
}
