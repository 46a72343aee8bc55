//! HTTP adapter for the quiz flow.
//!
//! The browser carries the session; every endpoint takes it in the body and
//! returns the updated copy.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::quiz_router;
