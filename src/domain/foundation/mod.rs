//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types
//! that form the vocabulary of the quiz domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CertificateId, SessionId};
pub use timestamp::Timestamp;
