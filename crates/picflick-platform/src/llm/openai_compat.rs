//! OpenAI-compatible LLM adapter.
//!
//! Works with DeepSeek, OpenAI, and any provider using the
//! OpenAI chat completions API format.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

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

/// Provider that speaks the OpenAI chat completions protocol.
/// Compatible with: DeepSeek, OpenAI, Groq, Together, Mistral, etc.
pub struct OpenAiCompatProvider {
    config: LlmConfig,
}

impl OpenAiCompatProvider {
    pub fn new(config: LlmConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.config.base_url())
    }

    async fn send(&self, req: ChatRequest) -> Result<ChatResponse> {
        if self.config.base_url().is_empty() {
            return Err(AppError::Config(
                "Custom provider needs an API base URL".to_string(),
            ));
        }

        let builder = Request::post(&self.endpoint())
            .header("Authorization", &format!("Bearer {}", self.config.api_key));
        let text = post_json(builder, &build_request_body(&req)).await?;
        parse_response(&text)
    }
}

#[async_trait(?Send)]
impl LlmPort for OpenAiCompatProvider {
    async fn chat_completion(&self, req: ChatRequest) -> Result<ChatResponse> {
        with_timeout(self.send(req), self.config.timeout_ms).await
    }

    fn provider_name(&self) -> &str {
        self.config.provider.label()
    }
}

/// JSON body for `POST /v1/chat/completions`
pub fn build_request_body(req: &ChatRequest) -> Value {
    let messages: Vec<Value> = req.messages.iter().map(message_to_json).collect();

    json!({
        "model": req.model,
        "messages": messages,
        "max_tokens": req.max_tokens,
        "temperature": req.temperature,
    })
}

/// Decode a chat completions response body
pub fn parse_response(body: &str) -> Result<ChatResponse> {
    let data: ApiResponse =
        serde_json::from_str(body).map_err(|e| AppError::Llm(e.to_string()))?;

    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Llm("No choices in response".to_string()))?;

    let message = Message {
        role: parse_role(&choice.message.role),
        content: choice.message.content.unwrap_or_default(),
    };
    let usage = data.usage.map(|u| TokenUsage {
        prompt_tokens: u.prompt_tokens,
        completion_tokens: u.completion_tokens,
        total_tokens: u.total_tokens,
    });

    Ok(ChatResponse { message, usage })
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

// ─── Serialization helpers ───────────────────────────────────

fn message_to_json(msg: &Message) -> Value {
    json!({
        "role": msg.role.as_str(),
        "content": msg.content,
    })
}

fn parse_role(role: &str) -> Role {
    match role {
        "system" => Role::System,
        "user" => Role::User,
        _ => Role::Assistant,
    }
}
