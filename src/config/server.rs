//! HTTP listener settings.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`. Question generation with retries
/// has to fit inside it, so anything beyond five minutes is a typo.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the quiz API listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated list of browser origins. Unset allows any origin.
    pub cors_origins: Option<String>,
}

/// Deployment stage; production switches logs to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,ai_sense_check=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidSocketAddr(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    /// Allowed origins with blanks dropped, e.g. from a trailing comma.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let server = ServerConfig::default();
        assert_eq!(server.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(server.request_timeout(), Duration::from_secs(30));
        assert!(!server.is_production());
        assert!(server.validate().is_ok());
    }

    #[test]
    fn unparseable_host_is_rejected() {
        let server = ServerConfig {
            host: "quiz host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            server.validate(),
            Err(ValidationError::InvalidSocketAddr(addr)) if addr == "quiz host:8080"
        ));
    }

    #[test]
    fn production_environment_is_detected() {
        let server = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(server.is_production());
    }

    #[test]
    fn cors_list_skips_blank_entries() {
        let server = ServerConfig {
            cors_origins: Some(" https://areyou-ai-ready.vercel.app ,,http://localhost:5173,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            server.cors_origins_list(),
            vec!["https://areyou-ai-ready.vercel.app", "http://localhost:5173"]
        );
        assert!(ServerConfig::default().cors_origins_list().is_empty());
    }

    #[test]
    fn port_zero_is_rejected() {
        let server = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(server.validate(), Err(ValidationError::InvalidPort));
    }

    #[test]
    fn timeout_must_be_within_bounds() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let server = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(server.validate(), Err(ValidationError::InvalidTimeout));
        }
    }
}
