//! Coarse location attached to a completed session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// City and country resolved from the client's IP. Either part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Geography {
    /// Creates a geography, treating blank parts as missing.
    pub fn new(city: Option<String>, country: Option<String>) -> Self {
        let clean = |part: Option<String>| {
            part.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        Self {
            city: clean(city),
            country: clean(country),
        }
    }

    /// The "nothing known" value.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.country.is_none()
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
