//! Shared `fetch` plumbing for the provider adapters.

use gloo_net::http::RequestBuilder;
use serde_json::Value;

use picflick_types::{AppError, Result};

/// Send `body` as JSON and return the response text.
///
/// Non-2xx statuses become `AppError::Llm("HTTP {status}: {body}")` so the
/// provider's own error message reaches the user.
pub async fn post_json(builder: RequestBuilder, body: &Value) -> Result<String> {
    let response = builder
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| AppError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        log::error!("Provider answered HTTP {}", status);
        return Err(AppError::Llm(format!("HTTP {}: {}", status, text.trim())));
    }
    Ok(text)
}
