//! Certificate Renderer Port - turns a certificate into a downloadable file.

use crate::domain::certificate::Certificate;

/// Port for rendering certificates.
pub trait CertificateRenderer: Send + Sync {
    fn render(&self, certificate: &Certificate) -> Result<RenderedCertificate, RenderError>;
}

/// A rendered certificate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCertificate {
    /// MIME type, e.g. `image/svg+xml`.
    pub content_type: &'static str,
    /// Suggested download name including extension.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Certificate rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render certificate: {0}")]
    Failed(String),
}
