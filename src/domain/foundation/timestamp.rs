//! UTC timestamps carried by quiz sessions.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in time, always UTC. Serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// RFC 3339 with millisecond precision and a `Z` suffix, the format the
    /// results sheet stores.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap().into()
    }

    #[test]
    fn sheet_format_uses_millis_and_z() {
        assert_eq!(fixed().to_rfc3339(), "2024-01-15T10:30:00.000Z");
        assert_eq!(fixed().to_string(), "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn survives_a_client_round_trip() {
        let json = serde_json::to_string(&fixed()).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixed());
    }

    #[test]
    fn accepts_offsets_from_clients() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T12:30:00+02:00\"").unwrap();
        assert_eq!(ts, fixed());
    }

    #[test]
    fn orders_chronologically() {
        assert!(fixed() < Timestamp::now());
    }
}
