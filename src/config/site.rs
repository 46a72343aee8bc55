//! Public site configuration

use serde::Deserialize;

use super::ai::is_http_url;
use super::error::ValidationError;

/// Public-facing site settings
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// URL advertised in share posts
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.public_url) {
            return Err(ValidationError::InvalidUrl("site.public_url"));
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_url: default_public_url(),
        }
    }
}

fn default_public_url() -> String {
    "https://areyou-ai-ready.vercel.app".to_string()
}
