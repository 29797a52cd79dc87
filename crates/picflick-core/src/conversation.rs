//! Chat exchange that grows the conversation history.
//!
//! The history is owned by the caller. `exchange` reads it to give the
//! provider context and returns the new pair without recording it, so the
//! caller decides when the pair becomes part of the log.

use picflick_types::{
    config::AppConfig,
    conversation::{ConversationHistory, MessagePair},
    message::Message,
    AppError, Result,
};

use crate::ports::{ChatRequest, LlmPort};

/// Provider messages for a new turn: system prompt, prior pairs, new input.
pub fn build_messages(
    system_prompt: &str,
    history: &ConversationHistory,
    user_input: &str,
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 2);
    if !system_prompt.trim().is_empty() {
        messages.push(Message::system(system_prompt));
    }
    for pair in history.pairs() {
        messages.push(Message::user(&pair.user));
        messages.push(Message::assistant(&pair.agent));
    }
    messages.push(Message::user(user_input));
    messages
}

/// Send one user message and return the completed pair.
pub async fn exchange(
    llm: &dyn LlmPort,
    config: &AppConfig,
    history: &ConversationHistory,
    user_input: &str,
) -> Result<MessagePair> {
    let user_input = user_input.trim();
    if user_input.is_empty() {
        return Err(AppError::Config("Cannot send an empty message".to_string()));
    }

    let req = ChatRequest {
        messages: build_messages(&config.chat_system_prompt, history, user_input),
        model: config.llm.model.clone(),
        max_tokens: config.llm.max_tokens,
        temperature: config.llm.temperature,
    };

    let response = llm.chat_completion(req).await?;
    let reply = response.message.content.trim().to_string();
    if reply.is_empty() {
        return Err(AppError::Llm("Provider returned an empty reply".to_string()));
    }

    log::debug!("Chat turn {} answered by {}", history.len() + 1, llm.provider_name());
    Ok(MessagePair::new(user_input, reply))
}
