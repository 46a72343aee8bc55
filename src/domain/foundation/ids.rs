//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Characters allowed after the prefix: an uppercased nanoid alphabet.
const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

/// Public identifier printed on a certificate, e.g. `ASC-3F9Q01B_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CertificateId(String);

impl CertificateId {
    /// Prefix shared by every certificate id.
    pub const PREFIX: &'static str = "ASC-";

    /// Number of characters after the prefix.
    pub const CODE_LEN: usize = 8;

    /// Shown on certificates rendered before a session has completed.
    pub const PLACEHOLDER: &'static str = "ASC-XXXXXXXX";

    /// Generates a fresh random certificate id.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4();
        // bytes 6 and 8 hold the fixed version and variant bits
        let code: String = uuid
            .as_bytes()
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != 6 && *idx != 8)
            .take(Self::CODE_LEN)
            .map(|(_, byte)| CODE_ALPHABET[usize::from(*byte) % CODE_ALPHABET.len()] as char)
            .collect();
        Self(format!("{}{}", Self::PREFIX, code))
    }

    /// The placeholder id.
    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }

    /// Parses and validates a certificate id.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let code = value.strip_prefix(Self::PREFIX).ok_or_else(|| {
            ValidationError::invalid_format("certificate_id", "must start with ASC-")
        })?;

        if code.len() != Self::CODE_LEN || !code.bytes().all(|b| CODE_ALPHABET.contains(&b)) {
            return Err(ValidationError::invalid_format(
                "certificate_id",
                "expected 8 characters from A-Z, 0-9, '_' or '-' after the prefix",
            ));
        }

        Ok(Self(value))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CertificateId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CertificateId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CertificateId> for String {
    fn from(id: CertificateId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_roundtrips_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn session_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn generated_certificate_id_has_expected_shape() {
        let id = CertificateId::generate();
        assert!(id.as_str().starts_with("ASC-"));
        assert_eq!(id.as_str().len(), 12);
        assert!(CertificateId::parse(id.as_str()).is_ok());
    }

    #[test]
    fn certificate_id_placeholder_is_valid() {
        assert_eq!(CertificateId::placeholder().as_str(), "ASC-XXXXXXXX");
        assert!(CertificateId::parse(CertificateId::PLACEHOLDER).is_ok());
    }

    #[test]
    fn certificate_id_accepts_uppercased_nanoid_codes() {
        for id in ["ASC-V1STGXR8", "ASC-_Z0-A9QK", "ASC--------_"] {
            assert!(CertificateId::parse(id).is_ok(), "{} should parse", id);
        }
    }

    #[test]
    fn generated_codes_stay_in_alphabet() {
        for _ in 0..100 {
            let id = CertificateId::generate();
            let code = id.as_str().strip_prefix(CertificateId::PREFIX).unwrap();
            assert_eq!(code.len(), CertificateId::CODE_LEN);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn certificate_id_rejects_bad_prefix_and_length() {
        assert!(CertificateId::parse("XYZ-12345678").is_err());
        assert!(CertificateId::parse("ASC-1234").is_err());
        assert!(CertificateId::parse("ASC-abcdefgh").is_err());
        assert!(CertificateId::parse("ASC-AB CD.12").is_err());
    }

    #[test]
    fn certificate_id_deserializes_with_validation() {
        let ok: Result<CertificateId, _> = serde_json::from_str("\"ASC-AB12CD34\"");
        assert!(ok.is_ok());

        let bad: Result<CertificateId, _> = serde_json::from_str("\"ASC-??\"");
        assert!(bad.is_err());
    }
}
