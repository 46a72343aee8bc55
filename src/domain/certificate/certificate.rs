//! Certificate value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CertificateId;
use crate::domain::profiling::Profile;
use crate::domain::quiz::{QuizSession, SessionError};

/// Holder name printed when none is supplied.
pub const DEFAULT_HOLDER: &str = "Certificate User";

/// Everything printed on a completion certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub holder_name: String,
    pub profile: Profile,
    pub certificate_id: CertificateId,
}

impl Certificate {
    /// Builds a certificate, defaulting a blank name and a missing id.
    pub fn new(name: Option<&str>, profile: Profile, certificate_id: Option<CertificateId>) -> Self {
        let holder_name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_HOLDER)
            .to_string();
        Self {
            holder_name,
            profile,
            certificate_id: certificate_id.unwrap_or_else(CertificateId::placeholder),
        }
    }

    /// Certificate for a completed session.
    pub fn for_session(session: &QuizSession) -> Result<Self, SessionError> {
        let profile = session.ai_profile.ok_or(SessionError::NotCompleted)?;
        Ok(Self::new(
            Some(&session.name),
            profile,
            session.certificate_id.clone(),
        ))
    }

    /// Profile description phrased about the holder.
    pub fn personalized_description(&self) -> String {
        self.profile.personalized_description(&self.holder_name)
    }

    /// Download file name without extension, e.g. `AI-Certificate-Ada Lovelace`.
    ///
    /// Characters that are unsafe in a `Content-Disposition` header become `_`.
    pub fn file_stem(&self) -> String {
        let name: String = self
            .holder_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("AI-Certificate-{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::quiz::session::fixtures;
    use crate::domain::quiz::Geography;

    #[test]
    fn blank_name_and_missing_id_use_defaults() {
        let cert = Certificate::new(Some("  "), Profile::WorkflowOptimizer, None);
        assert_eq!(cert.holder_name, "Certificate User");
        assert_eq!(cert.certificate_id.as_str(), "ASC-XXXXXXXX");
    }

    #[test]
    fn personalizes_description_with_holder_name() {
        let cert = Certificate::new(Some("Ada"), Profile::TrustFocusedOperator, None);
        assert_eq!(
            cert.personalized_description(),
            "Ada prioritizes reliability, accountability, and confidence in outputs."
        );
    }

    #[test]
    fn file_stem_replaces_header_unsafe_characters() {
        let cert = Certificate::new(Some("Zoë \"Z\" O'Neil"), Profile::SystemsThinker, None);
        assert_eq!(cert.file_stem(), "AI-Certificate-Zo_ _Z_ O_Neil");
    }

    #[test]
    fn for_session_requires_completion() {
        let session = fixtures::answered_with("b");
        assert_eq!(
            Certificate::for_session(&session).unwrap_err(),
            SessionError::NotCompleted
        );

        let mut session = session;
        session.complete(Geography::unknown(), Timestamp::now()).unwrap();
        let cert = Certificate::for_session(&session).unwrap();
        assert_eq!(cert.holder_name, "Ada");
        assert_eq!(Some(cert.certificate_id), session.certificate_id);
    }
}
