//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::application::{
    AnswerQuestionHandler, CompleteSessionHandler, GenerateQuestionsHandler, SaveSessionHandler,
    ShareSessionHandler, StartSessionHandler,
};
use crate::ports::{CertificateRenderer, GeoLocator, QuestionGenerator, SessionSink};

/// Dependencies shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub question_generator: Arc<dyn QuestionGenerator>,
    pub session_sink: Arc<dyn SessionSink>,
    pub geo_locator: Arc<dyn GeoLocator>,
    pub certificate_renderer: Arc<dyn CertificateRenderer>,
    /// Public site URL advertised in share posts.
    pub site_url: Arc<str>,
}

impl AppState {
    pub fn new(
        question_generator: Arc<dyn QuestionGenerator>,
        session_sink: Arc<dyn SessionSink>,
        geo_locator: Arc<dyn GeoLocator>,
        certificate_renderer: Arc<dyn CertificateRenderer>,
        site_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            question_generator,
            session_sink,
            geo_locator,
            certificate_renderer,
            site_url: site_url.into(),
        }
    }

    pub fn generate_questions_handler(&self) -> GenerateQuestionsHandler {
        GenerateQuestionsHandler::new(self.question_generator.clone())
    }

    pub fn start_session_handler(&self) -> StartSessionHandler {
        StartSessionHandler::new(self.question_generator.clone())
    }

    pub fn answer_question_handler(&self) -> AnswerQuestionHandler {
        AnswerQuestionHandler::new()
    }

    pub fn complete_session_handler(&self) -> CompleteSessionHandler {
        CompleteSessionHandler::new(self.geo_locator.clone())
    }

    pub fn save_session_handler(&self) -> SaveSessionHandler {
        SaveSessionHandler::new(self.session_sink.clone())
    }

    pub fn share_session_handler(&self) -> ShareSessionHandler {
        ShareSessionHandler::new(self.save_session_handler(), self.site_url.to_string())
    }
}
