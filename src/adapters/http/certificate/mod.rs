//! HTTP adapter for certificate downloads.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::certificate_router;
