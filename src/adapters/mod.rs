//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - OpenAI chat provider and the LLM question generator
//! - `sheets` - Spreadsheet webhook session sink
//! - `geolocation` - ipapi.co visitor lookup
//! - `certificate` - SVG certificate renderer
//! - `http` - axum REST API

pub mod ai;
pub mod certificate;
pub mod geolocation;
pub mod http;
pub mod sheets;

pub use ai::{LlmQuestionGenerator, OpenAIConfig, OpenAIProvider};
pub use certificate::SvgCertificateRenderer;
pub use geolocation::{IpApiLocator, NoopGeoLocator};
pub use sheets::{DisabledSessionSink, WebhookSessionSink};
