//! Google Gemini adapter (`generateContent` REST API).

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use picflick_core::ports::*;
use picflick_types::{
    config::LlmConfig,
    message::{Message, Role},
    AppError, Result,
};

use super::{http::post_json, timeout::with_timeout};

pub struct GeminiProvider {
    config: LlmConfig,
}

impl GeminiProvider {
    pub fn new(config: LlmConfig) -> Self {
        Self { config }
    }

    /// `{base}/v1beta/models/{model}:generateContent`. Accepts model names
    /// with or without the `models/` prefix.
    pub fn endpoint(&self, model: &str) -> String {
        let model = model.trim().trim_start_matches("models/");
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url(),
            model
        )
    }

    async fn send(&self, req: ChatRequest) -> Result<ChatResponse> {
        let builder =
            Request::post(&self.endpoint(&req.model)).header("x-goog-api-key", &self.config.api_key);
        let text = post_json(builder, &build_request_body(&req)).await?;
        parse_response(&text)
    }
}

#[async_trait(?Send)]
impl LlmPort for GeminiProvider {
    async fn chat_completion(&self, req: ChatRequest) -> Result<ChatResponse> {
        with_timeout(self.send(req), self.config.timeout_ms).await
    }

    fn provider_name(&self) -> &str {
        "Google Gemini"
    }
}

/// JSON body for `generateContent`.
///
/// System messages are joined into `systemInstruction`; the rest become
/// `contents` with the assistant role renamed to `model`.
pub fn build_request_body(req: &ChatRequest) -> Value {
    let system: Vec<&str> = req
        .messages
        .iter()
        .filter(|m| m.role == Role::System)
        .map(|m| m.content.as_str())
        .collect();

    let contents: Vec<Value> = req
        .messages
        .iter()
        .filter(|m| m.role != Role::System)
        .map(|m| {
            json!({
                "role": gemini_role(m.role),
                "parts": [{ "text": m.content }],
            })
        })
        .collect();

    let mut body = json!({
        "contents": contents,
        "generationConfig": {
            "temperature": req.temperature,
            "maxOutputTokens": req.max_tokens,
        },
    });

    if !system.is_empty() {
        body["systemInstruction"] = json!({ "parts": [{ "text": system.join("\n\n") }] });
    }

    body
}

/// Decode a `generateContent` response body
pub fn parse_response(body: &str) -> Result<ChatResponse> {
    let data: ApiResponse =
        serde_json::from_str(body).map_err(|e| AppError::Llm(e.to_string()))?;

    let Some(candidate) = data.candidates.into_iter().next() else {
        let reason = data
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(AppError::Llm(format!("Gemini returned no answer: {}", reason)));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason) = candidate.finish_reason {
            log::warn!("Gemini candidate is empty, finishReason={}", reason);
        }
    }

    let usage = data.usage_metadata.map(|u| TokenUsage {
        prompt_tokens: u.prompt_token_count,
        completion_tokens: u.candidates_token_count,
        total_tokens: u.total_token_count,
    });

    Ok(ChatResponse {
        message: Message::assistant(text),
        usage,
    })
}

fn gemini_role(role: Role) -> &'static str {
    match role {
        Role::Assistant => "model",
        Role::User | Role::System => "user",
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
    usage_metadata: Option<ApiUsage>,
    prompt_feedback: Option<ApiPromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCandidate {
    content: Option<ApiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Deserialize)]
struct ApiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}
