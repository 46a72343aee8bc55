//! Quiz command handlers.

mod answer_question;
mod complete_session;
mod errors;
pub(crate) mod generate_questions;
pub(crate) mod save_session;
mod share_session;
mod start_session;

pub use answer_question::{AnswerQuestionCommand, AnswerQuestionHandler, AnswerQuestionResult};
pub use complete_session::{
    CompleteSessionCommand, CompleteSessionHandler, CompleteSessionResult,
};
pub use errors::QuizError;
pub use generate_questions::{GenerateQuestionsCommand, GenerateQuestionsHandler};
pub use save_session::{SaveSessionCommand, SaveSessionHandler, SaveSessionResult};
pub use share_session::{ShareSessionCommand, ShareSessionHandler, ShareSessionResult};
pub use start_session::{StartSessionCommand, StartSessionHandler};
