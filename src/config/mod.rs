//! Runtime settings for the quiz service.
//!
//! Everything is read from the process environment (after an optional `.env`)
//! through the `config` crate. Keys look like `SENSE_CHECK__AI__MODEL`: the
//! `SENSE_CHECK` prefix, then section and field joined by `__`.
//!
//! ```no_run
//! use ai_sense_check::config::AppConfig;
//!
//! let settings = AppConfig::load()?;
//! settings.validate()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ai;
mod error;
mod geolocation;
mod server;
mod sheets;
mod site;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use geolocation::GeolocationConfig;
pub use server::{Environment, ServerConfig};
pub use sheets::SheetsConfig;
pub use site::SiteConfig;

use serde::Deserialize;

/// All sections of the service configuration. Only the OpenAI key lacks a
/// usable default; `validate` reports it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ai: AiConfig,
    /// Spreadsheet webhook receiving finished sessions.
    pub sheets: SheetsConfig,
    pub geolocation: GeolocationConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and then the `SENSE_CHECK__*` variables, so
    /// `SENSE_CHECK__AI__OPENAI_API_KEY` lands in `ai.openai_api_key`.
    ///
    /// Fails only when a value cannot be converted to its field type.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::Dotenv(e.to_string()));
            }
        }

        let source = config::Environment::with_prefix("SENSE_CHECK").separator("__");
        let settings = config::Config::builder().add_source(source).build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Checks every section, stopping at the first invalid value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.sheets.validate()?;
        self.geolocation.validate()?;
        self.site.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
