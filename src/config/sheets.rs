//! Results spreadsheet webhook configuration

use serde::Deserialize;
use std::time::Duration;

use super::ai::is_http_url;
use super::error::ValidationError;

/// Spreadsheet webhook configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Webhook receiving session summaries. Unset disables export.
    pub webhook_url: Option<String>,

    /// Seconds before the webhook call is abandoned.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SheetsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The webhook URL, if one is set and non-blank
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.webhook_url() {
            Some(url) if !is_http_url(url) => Err(ValidationError::InvalidUrl("sheets.webhook_url")),
            _ => Ok(()),
        }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_url_counts_as_unset() {
        let config = SheetsConfig {
            webhook_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.webhook_url().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn url_must_be_http() {
        let config = SheetsConfig {
            webhook_url: Some("ftp://sheets".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("sheets.webhook_url"))
        );
    }
}
