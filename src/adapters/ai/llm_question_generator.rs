//! LLM-backed QuestionGenerator.
//!
//! Prompts the configured `AIProvider` for one scenario, pulls the JSON
//! object out of the reply and validates it into a `Question`.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::profiling::Signal;
use crate::domain::quiz::{Difficulty, Question, QuestionOption, QuizDomain};
use crate::ports::{AIProvider, GenerationError, Prompt, QuestionGenerator};

/// Generates quiz questions through a language model.
pub struct LlmQuestionGenerator {
    provider: Arc<dyn AIProvider>,
    temperature: f32,
    max_tokens: u32,
}

const SYSTEM_PROMPT: &str =
    "You write short, realistic workplace scenarios about AI for a reflection quiz. You reply with JSON only.";

impl LlmQuestionGenerator {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            temperature: Prompt::DEFAULT_TEMPERATURE,
            max_tokens: Prompt::DEFAULT_MAX_TOKENS,
        }
    }

    /// Overrides the sampling parameters.
    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    fn prompt(domain: &QuizDomain, difficulty: Difficulty) -> String {
        let signals: Vec<&str> = Signal::all().iter().map(|s| s.as_str()).collect();
        format!(
            r#"Write one realistic workplace AI scenario for the domain "{name}". Focus on: {focus}.

Length:
- scenario: two sentences, 30 to 50 words. Set the scene, then present a real tension or decision.
- options: four options of 15 to 22 words each, roughly equal in length, written in the first person.

Style:
- Address the reader as "you" or "your team". Never name or assume the reader's job title.
- Include one concrete detail such as a tool, a metric or a situation.
- Each option must reflect a genuinely different way of thinking about AI, not agree/disagree variants.
- Tag each option with one or two signals from: {signals}.
- Plain language, no buzzwords.

Reply with JSON only, no markdown:
{{"scenario": "...", "options": [{{"id": "a", "text": "...", "signals": ["Trust"]}}, {{"id": "b", "text": "...", "signals": ["Adoption"]}}, {{"id": "c", "text": "...", "signals": ["Efficiency"]}}, {{"id": "d", "text": "...", "signals": ["SystemsThinking"]}}]}}"#,
            name = domain.name,
            focus = domain.focus(difficulty),
            signals = signals.join(", "),
        )
    }

    /// Turns a raw model reply into a validated question.
    fn parse_question(
        domain: &QuizDomain,
        difficulty: Difficulty,
        reply: &str,
    ) -> Result<Question, GenerationError> {
        let json = extract_json_object(reply).ok_or_else(|| GenerationError::NoJson {
            domain: domain.name.to_string(),
        })?;

        let raw: RawQuestion =
            serde_json::from_str(json).map_err(|e| GenerationError::Malformed {
                domain: domain.name.to_string(),
                reason: e.to_string(),
            })?;

        let options = raw
            .options
            .into_iter()
            .map(|o| QuestionOption::new(o.id, o.text, known_signals(domain, o.signals)))
            .collect();

        Question::new(domain, difficulty, raw.scenario, options).map_err(|source| {
            GenerationError::Invalid {
                domain: domain.name.to_string(),
                source,
            }
        })
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(
        &self,
        domain: &QuizDomain,
        difficulty: Difficulty,
    ) -> Result<Question, GenerationError> {
        let prompt = Prompt::user(Self::prompt(domain, difficulty))
            .with_system(SYSTEM_PROMPT)
            .with_sampling(self.temperature, self.max_tokens);

        let completion = self.provider.complete(&prompt).await.map_err(|source| {
            GenerationError::Provider {
                domain: domain.name.to_string(),
                source,
            }
        })?;

        if completion.truncated {
            tracing::warn!(domain = domain.name, "Model reply hit the token limit");
        }
        let question = Self::parse_question(domain, difficulty, &completion.text)?;
        tracing::debug!(
            domain = domain.name,
            difficulty = %difficulty,
            "Question generated"
        );
        Ok(question)
    }
}

/// The span from the first `{` to the last `}`, inclusive.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Keeps the tags that name a known signal; unknown tags are dropped.
fn known_signals(domain: &QuizDomain, tags: Vec<String>) -> Vec<Signal> {
    tags.into_iter()
        .filter_map(|tag| match tag.parse::<Signal>() {
            Ok(signal) => Some(signal),
            Err(_) => {
                tracing::warn!(domain = domain.name, tag = %tag, "Dropping unknown signal tag");
                None
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    scenario: String,
    options: Vec<RawOption>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    id: String,
    text: String,
    #[serde(default)]
    signals: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::ports::AIError;

    const REPLY: &str = r#"Sure! Here it is:
```json
{"scenario": "Your team's meeting assistant now writes the minutes. Last week it missed a decision.",
 "options": [
   {"id": "a", "text": "I'd double-check every summary.", "signals": ["Trust"]},
   {"id": "b", "text": "I'd ask who actually reads them.", "signals": ["Adoption", "HumanBehavior"]},
   {"id": "c", "text": "I'd track time saved per meeting.", "signals": ["Efficiency"]},
   {"id": "d", "text": "I'd map who relies on the minutes.", "signals": ["SystemsThinking", "Curiosity"]}
 ]}
```"#;

    fn domain() -> &'static QuizDomain {
        QuizDomain::by_id(1).unwrap()
    }

    #[test]
    fn extracts_outermost_braces() {
        assert_eq!(extract_json_object("x {\"a\": {\"b\": 1}} y"), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn parses_fenced_reply() {
        let q = LlmQuestionGenerator::parse_question(domain(), Difficulty::Hard, REPLY).unwrap();

        assert_eq!(q.id, 1);
        assert_eq!(q.domain, "Email & meetings");
        assert_eq!(q.difficulty, Difficulty::Hard);
        assert_eq!(
            q.option("b").unwrap().signals,
            vec![Signal::Adoption, Signal::HumanBehavior]
        );
    }

    #[test]
    fn drops_unknown_signal_tags() {
        let q = LlmQuestionGenerator::parse_question(domain(), Difficulty::Easy, REPLY).unwrap();
        assert_eq!(q.option("d").unwrap().signals, vec![Signal::SystemsThinking]);
    }

    #[test]
    fn reply_without_json_is_no_json() {
        let err = LlmQuestionGenerator::parse_question(domain(), Difficulty::Easy, "Sorry, I can't.")
            .unwrap_err();
        assert!(matches!(err, GenerationError::NoJson { .. }));
        assert_eq!(err.domain(), "Email & meetings");
    }

    #[test]
    fn missing_fields_are_malformed() {
        let err = LlmQuestionGenerator::parse_question(domain(), Difficulty::Easy, r#"{"scenario": "x"}"#)
            .unwrap_err();
        assert!(matches!(err, GenerationError::Malformed { .. }));
    }

    #[test]
    fn three_options_are_invalid() {
        let reply = r#"{"scenario": "s", "options": [
            {"id": "a", "text": "1", "signals": []},
            {"id": "b", "text": "2", "signals": []},
            {"id": "c", "text": "3", "signals": []}]}"#;
        let err = LlmQuestionGenerator::parse_question(domain(), Difficulty::Easy, reply).unwrap_err();
        assert!(matches!(err, GenerationError::Invalid { .. }));
    }

    #[test]
    fn prompt_names_domain_and_focus() {
        let learning = QuizDomain::by_id(4).unwrap();
        let prompt = LlmQuestionGenerator::prompt(learning, Difficulty::Hard);
        assert!(prompt.contains("\"Learning\""));
        assert!(prompt.contains("Expertise erosion, bias, shallow learning"));
        assert!(prompt.contains("ContextAwareness"));
    }

    #[tokio::test]
    async fn generate_sends_sampling_parameters() {
        let provider = Arc::new(MockAIProvider::replying(REPLY));
        let generator = LlmQuestionGenerator::new(provider.clone()).with_sampling(0.5, 600);

        let question = generator.generate(domain(), Difficulty::Easy).await.unwrap();

        assert_eq!(question.options.len(), 4);
        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].temperature, 0.5);
        assert_eq!(prompts[0].max_tokens, 600);
        assert_eq!(prompts[0].system.as_deref(), Some(SYSTEM_PROMPT));
        assert!(prompts[0].user.contains("Email & meetings"));
    }

    #[tokio::test]
    async fn provider_failure_names_domain() {
        let provider = Arc::new(MockAIProvider::failing(AIError::Unauthorized));
        let generator = LlmQuestionGenerator::new(provider);

        let err = generator.generate(domain(), Difficulty::Easy).await.unwrap_err();

        assert!(matches!(err, GenerationError::Provider { .. }));
        assert!(err.to_string().contains("Email & meetings"));
    }
}
