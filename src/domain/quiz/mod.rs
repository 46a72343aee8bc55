//! Quiz Module - domains, generated questions and the client-carried session.
//!
//! # Flow
//!
//! 1. `QuizSession::start` with one generated `Question` per `QuizDomain`
//! 2. `record_answer` once per question (signals come from the stored option)
//! 3. `complete` scores the answers and issues a certificate id
//! 4. `summary` flattens the session for the spreadsheet sink

mod catalog;
mod difficulty;
mod errors;
mod geography;
mod question;
pub(crate) mod session;
mod summary;

pub use catalog::QuizDomain;
pub use difficulty::Difficulty;
pub use errors::SessionError;
pub use geography::Geography;
pub use question::{Question, QuestionOption, OPTIONS_PER_QUESTION};
pub use session::{QuizSession, ANONYMOUS};
pub use summary::SessionSummary;
