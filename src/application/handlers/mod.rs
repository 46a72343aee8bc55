//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod quiz;

pub use quiz::*;
