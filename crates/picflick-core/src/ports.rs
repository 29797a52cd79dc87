//! Port traits, the hexagonal architecture boundary.
//!
//! The core never imports platform code; it only depends on these traits.
//! Implementations live in `picflick-platform` (browser adapters).

use async_trait::async_trait;
use picflick_types::{message::Message, Result};

/// Request to send to a text-generation provider
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Complete (non-streaming) response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub message: Message,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait(?Send)]
pub trait LlmPort {
    /// One synchronous round trip: the whole reply arrives at once
    async fn chat_completion(&self, req: ChatRequest) -> Result<ChatResponse>;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}
