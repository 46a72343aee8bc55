//! HTTP adapters - REST API implementations.
//!
//! Each module has its own router; [`app_router`] merges them behind the
//! shared CORS, timeout and trace layers.

pub mod certificate;
pub mod client_ip;
pub mod error;
pub mod profile;
pub mod quiz;
pub mod router;
pub mod state;

pub use client_ip::ClientIp;
pub use error::{ApiError, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
