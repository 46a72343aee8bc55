//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Chat completions from a language model
//! - `QuestionGenerator` - One scenario question per quiz domain
//! - `SessionSink` - Best-effort export of session summaries
//! - `GeoLocator` - Best-effort city/country lookup by IP
//! - `CertificateRenderer` - Certificate to downloadable file

mod ai_provider;
mod certificate_renderer;
mod geo_locator;
mod question_generator;
mod session_sink;

pub use ai_provider::{AIError, AIProvider, Completion, Prompt};
pub use certificate_renderer::{CertificateRenderer, RenderError, RenderedCertificate};
pub use geo_locator::{is_public_ip, GeoLocator};
pub use question_generator::{GenerationError, QuestionGenerator};
pub use session_sink::{SessionSink, SinkError};
