//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `profiling` - Signal scoring, profile assignment and reveal lookup
//! - `quiz` - Quiz domains, generated questions and the session aggregate
//! - `certificate` - Completion certificate and LinkedIn share message

pub mod certificate;
pub mod foundation;
pub mod profiling;
pub mod quiz;
