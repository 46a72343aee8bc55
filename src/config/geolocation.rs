//! IP geolocation configuration

use serde::Deserialize;
use std::time::Duration;

use super::ai::is_http_url;
use super::error::ValidationError;

/// Geolocation lookup configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeolocationConfig {
    /// Disable to skip lookups entirely
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// ipapi-compatible base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GeolocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled && !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("geolocation.base_url"));
        }
        Ok(())
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://ipapi.co".to_string()
}

fn default_timeout() -> u64 {
    3
}
