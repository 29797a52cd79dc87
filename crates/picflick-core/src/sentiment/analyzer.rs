use picflick_types::config::LlmConfig;
use picflick_types::conversation::ConversationHistory;
use picflick_types::error::AnalysisError;
use picflick_types::message::Message;
use picflick_types::sentiment::SentimentReport;

use super::{parse::parse_report, prompt::build_prompt};
use crate::ports::{ChatRequest, LlmPort};

/// Runs sentiment analysis of a conversation through a text-generation provider.
///
/// Stateless between calls: every [`analyze`](Self::analyze) sends exactly one
/// request and returns either a complete report or an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentAnalyzer {
    model: String,
    max_tokens: u32,
}

impl SentimentAnalyzer {
    /// Low randomness keeps the model on the JSON schema
    pub const TEMPERATURE: f64 = 0.3;

    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
        }
    }

    /// Use the model and token limit of the configured provider.
    /// The chat temperature is not inherited.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config.model.clone(), config.max_tokens)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The single request `analyze` sends for `history`
    pub fn request_for(&self, history: &ConversationHistory) -> ChatRequest {
        ChatRequest {
            messages: vec![Message::user(build_prompt(history))],
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: Self::TEMPERATURE,
        }
    }

    /// Analyze `history`, which callers are expected to have checked is non-empty.
    pub async fn analyze(
        &self,
        llm: &dyn LlmPort,
        history: &ConversationHistory,
    ) -> Result<SentimentReport, AnalysisError> {
        if history.is_empty() {
            return Err(AnalysisError::EmptyHistory);
        }

        log::info!(
            "Analyzing {} message pairs with {} ({})",
            history.len(),
            llm.provider_name(),
            self.model
        );

        let response = llm.chat_completion(self.request_for(history)).await.map_err(|e| {
            log::error!("Sentiment request failed: {}", e);
            AnalysisError::from(e)
        })?;

        if let Some(usage) = &response.usage {
            log::debug!(
                "Sentiment tokens: prompt={} completion={}",
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        let raw = response.message.content;
        parse_report(&raw, history).map_err(|e| {
            log::warn!("Rejected model output: {}", e);
            e
        })
    }
}
