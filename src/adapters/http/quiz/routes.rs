//! Route configuration for quiz endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{
    answer_question, complete_session, generate_questions, save_session, share_session,
    start_session,
};
use crate::adapters::http::state::AppState;

/// Creates the quiz router.
///
/// Routes:
/// - `POST /api/questions` - Generate one question per domain
/// - `POST /api/sessions` - Start a session
/// - `POST /api/sessions/answer` - Record an answer
/// - `POST /api/sessions/complete` - Score a fully answered session
/// - `POST /api/sessions/save` - Persist the session summary
/// - `POST /api/sessions/share` - Build the LinkedIn share post
pub fn quiz_router() -> Router<AppState> {
    Router::new()
        .route("/api/questions", post(generate_questions))
        .route("/api/sessions", post(start_session))
        .route("/api/sessions/answer", post(answer_question))
        .route("/api/sessions/complete", post(complete_session))
        .route("/api/sessions/save", post(save_session))
        .route("/api/sessions/share", post(share_session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::{failing_state, test_state};
    use crate::domain::foundation::Timestamp;
    use crate::domain::profiling::{Answer, Signal};
    use crate::domain::quiz::session::fixtures;
    use crate::domain::quiz::{Geography, QuizSession};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn app() -> Router {
        quiz_router().with_state(test_state().0)
    }

    fn completed_session() -> QuizSession {
        let mut session = fixtures::answered_with("a");
        session
            .complete(Geography::unknown(), Timestamp::now())
            .unwrap();
        session
    }

    #[tokio::test]
    async fn generates_eight_questions() {
        let (status, body) = post_json(app(), "/api/questions", json!({"difficulty": "easy"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"].as_array().unwrap().len(), 8);
        assert_eq!(body["questions"][0]["difficulty"], "easy");
    }

    #[tokio::test]
    async fn generation_failure_is_bad_gateway() {
        let app = quiz_router().with_state(failing_state());
        let (status, body) = post_json(app, "/api/questions", json!({"difficulty": "hard"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "QUESTION_GENERATION_FAILED");
    }

    #[tokio::test]
    async fn start_session_defaults_anonymous_name() {
        let (status, body) = post_json(app(), "/api/sessions", json!({"difficulty": "easy"})).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Anonymous");
        assert_eq!(body["questions"].as_array().unwrap().len(), 8);
        assert_eq!(body["answers"].as_array().unwrap().len(), 0);
        assert_eq!(body["linkedInClicked"], false);
    }

    #[tokio::test]
    async fn answer_returns_reveal_for_stored_option() {
        let session = fixtures::session();
        let (status, body) = post_json(
            app(),
            "/api/sessions/answer",
            json!({"session": session, "questionId": 1, "optionId": "c"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"]["signals"], json!(["Trust", "Efficiency"]));
        assert_eq!(body["reveal"]["key"], "trustFocus");
        assert_eq!(body["remaining"], 7);
        assert_eq!(body["session"]["answers"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn answer_to_unknown_question_is_not_found() {
        let (status, body) = post_json(
            app(),
            "/api/sessions/answer",
            json!({"session": fixtures::session(), "questionId": 42, "optionId": "a"}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "QUESTION_NOT_FOUND");
    }

    #[tokio::test]
    async fn answering_twice_is_conflict() {
        let mut session = fixtures::session();
        session.record_answer(1, "a").unwrap();
        let (status, body) = post_json(
            app(),
            "/api/sessions/answer",
            json!({"session": session, "questionId": 1, "optionId": "b"}),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "QUESTION_ALREADY_ANSWERED");
    }

    #[tokio::test]
    async fn complete_requires_all_answers() {
        let (status, body) = post_json(
            app(),
            "/api/sessions/complete",
            json!({"session": fixtures::session()}),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "SESSION_INCOMPLETE");
    }

    #[tokio::test]
    async fn complete_assigns_profile_and_certificate() {
        let (status, body) = post_json(
            app(),
            "/api/sessions/complete",
            json!({"session": fixtures::answered_with("c")}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"], "Trust-Focused Operator");
        assert_eq!(body["signalScores"]["Trust"], 8);
        assert_eq!(body["clusterScores"].as_array().unwrap().len(), 6);
        assert!(body["certificateId"].as_str().unwrap().starts_with("ASC-"));
        assert_eq!(body["session"]["aiProfile"], "Trust-Focused Operator");
    }

    #[tokio::test]
    async fn save_persists_in_background() {
        let (state, sink) = test_state();
        let app = quiz_router().with_state(state);
        let session = completed_session();

        let (status, body) = post_json(app, "/api/sessions/save", json!({"session": session})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["sessionId"], session.session_id.to_string());

        for _ in 0..50 {
            if !sink.saved.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].ai_profile, "Systems Thinker");
    }

    #[tokio::test]
    async fn share_marks_session_and_builds_linkedin_url() {
        let (status, body) = post_json(
            app(),
            "/api/sessions/share",
            json!({"session": completed_session()}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["text"].as_str().unwrap().contains("Systems Thinker"));
        assert!(body["url"]
            .as_str()
            .unwrap()
            .starts_with("https://www.linkedin.com/feed/?shareActive=true&text="));
        assert_eq!(body["session"]["linkedInClicked"], true);
    }

    #[tokio::test]
    async fn share_before_completion_is_conflict() {
        let (status, body) = post_json(
            app(),
            "/api/sessions/share",
            json!({"session": fixtures::session()}),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "SESSION_NOT_COMPLETED");
    }

    #[tokio::test]
    async fn complete_rejects_invented_answers() {
        let mut session = fixtures::answered_with("a");
        session.answers.push(Answer::new(99, "zz", vec![Signal::Trust; 20]));

        let (status, body) =
            post_json(app(), "/api/sessions/complete", json!({"session": session})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["field"], "answers");
    }

    #[tokio::test]
    async fn save_rejects_reworked_signals() {
        let (state, sink) = test_state();
        let app = quiz_router().with_state(state);
        let mut session = completed_session();
        session.answers[0].signals = vec![Signal::Trust; 8];

        let (status, body) = post_json(app, "/api/sessions/save", json!({"session": session})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(sink.saved.lock().unwrap().is_empty());
    }
}
