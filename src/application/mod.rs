//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Sessions are carried by the client, so every handler takes the session in
//! its command and returns the updated session in its result.

pub mod handlers;

pub use handlers::{
    AnswerQuestionCommand, AnswerQuestionHandler, AnswerQuestionResult, CompleteSessionCommand,
    CompleteSessionHandler, CompleteSessionResult, GenerateQuestionsCommand,
    GenerateQuestionsHandler, QuizError, SaveSessionCommand, SaveSessionHandler,
    SaveSessionResult, ShareSessionCommand, ShareSessionHandler, ShareSessionResult,
    StartSessionCommand, StartSessionHandler,
};
