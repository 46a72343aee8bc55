//! HTTP DTOs for certificate endpoints.

use serde::Deserialize;

use crate::domain::profiling::Profile;

/// Request to render a certificate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub profile: Profile,
    /// Blank or missing renders the placeholder id.
    #[serde(default)]
    pub certificate_id: Option<String>,
}
