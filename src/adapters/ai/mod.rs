//! AI Adapters.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI chat completions (gpt-4o-mini by default)
//! - `MockAIProvider` - Scripted replies for tests
//! - `LlmQuestionGenerator` - QuestionGenerator on top of any AIProvider

mod llm_question_generator;
mod mock_provider;
mod openai_provider;

pub use llm_question_generator::LlmQuestionGenerator;
pub use mock_provider::{MockAIProvider, MockReply};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
