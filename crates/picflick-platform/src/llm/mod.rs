//! LLM provider adapters.

pub mod gemini;
pub mod http;
pub mod openai_compat;
pub mod timeout;

use std::rc::Rc;

use picflick_core::ports::LlmPort;
use picflick_types::config::{LlmConfig, LlmProvider};

pub use gemini::GeminiProvider;
pub use openai_compat::OpenAiCompatProvider;
pub use timeout::with_timeout;

/// Pick the adapter that speaks `config.provider`'s wire format.
pub fn build_provider(config: &LlmConfig) -> Rc<dyn LlmPort> {
    log::info!(
        "Using {} provider, model {} at {}",
        config.provider.label(),
        config.model,
        config.base_url()
    );
    match config.provider {
        LlmProvider::Google => Rc::new(GeminiProvider::new(config.clone())),
        LlmProvider::OpenAI | LlmProvider::DeepSeek | LlmProvider::Custom => {
            Rc::new(OpenAiCompatProvider::new(config.clone()))
        }
    }
}
