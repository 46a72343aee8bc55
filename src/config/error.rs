use thiserror::Error;

/// Failure to assemble an `AppConfig` from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Could not read .env file: {0}")]
    Dotenv(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that is out of range or missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host/port combination: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("max_tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("Invalid URL for {0}: must start with http:// or https://")]
    InvalidUrl(&'static str),
}
