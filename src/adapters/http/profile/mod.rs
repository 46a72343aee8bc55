//! HTTP adapter for profile scoring and reveals.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::profile_router;
