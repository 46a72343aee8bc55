//! Certificate Module - completion certificate contents and share message.

mod certificate;
mod share;

pub use certificate::{Certificate, DEFAULT_HOLDER};
pub use share::ShareMessage;
