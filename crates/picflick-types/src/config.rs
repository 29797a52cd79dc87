use serde::{Deserialize, Serialize};

/// Top-level dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub llm: LlmConfig,
    /// System prompt for the chat page. The analyzer builds its own prompt.
    pub chat_system_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            chat_system_prompt: DEFAULT_CHAT_PROMPT.to_string(),
        }
    }
}

impl AppConfig {
    /// Configuration seeded from the build environment.
    ///
    /// The browser has no process environment, so the variables are captured
    /// once when the WASM bundle is compiled.
    pub fn from_env() -> Self {
        Self {
            llm: LlmConfig::from_vars(
                option_env!("PICFLICK_PROVIDER"),
                option_env!("PICFLICK_MODEL"),
                option_env!("PICFLICK_API_KEY").or(option_env!("GOOGLE_API_KEY")),
            ),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub model: String,
    pub api_key: String,
    pub api_base: Option<String>,
    pub max_tokens: u32,
    /// Sampling temperature for chat replies
    pub temperature: f64,
    /// Client-side request timeout; `None` waits for the provider indefinitely
    pub timeout_ms: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::Google,
            model: LlmProvider::Google.default_model().to_string(),
            api_key: String::new(),
            api_base: None,
            max_tokens: 2048,
            temperature: 0.7,
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }
}

pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

impl LlmConfig {
    /// Build a config from optional overrides. Blank values keep the defaults.
    pub fn from_vars(provider: Option<&str>, model: Option<&str>, api_key: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(p) = provider.and_then(LlmProvider::from_name) {
            config.provider = p;
            config.model = p.default_model().to_string();
        }
        if let Some(m) = model.map(str::trim).filter(|m| !m.is_empty()) {
            config.model = m.to_string();
        }
        if let Some(k) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
            config.api_key = k.to_string();
        }
        config
    }

    pub fn base_url(&self) -> &str {
        self.api_base
            .as_deref()
            .map(|b| b.trim_end_matches('/'))
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| self.provider.default_base_url())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LlmProvider {
    Google,
    OpenAI,
    DeepSeek,
    Custom,
}

impl LlmProvider {
    pub fn default_base_url(&self) -> &str {
        match self {
            LlmProvider::Google => "https://generativelanguage.googleapis.com",
            LlmProvider::OpenAI => "https://api.openai.com",
            LlmProvider::DeepSeek => "https://api.deepseek.com",
            LlmProvider::Custom => "",
        }
    }

    pub fn default_model(&self) -> &str {
        match self {
            LlmProvider::Google => "gemini-1.5-flash",
            LlmProvider::OpenAI => "gpt-4o-mini",
            LlmProvider::DeepSeek => "deepseek-chat",
            LlmProvider::Custom => "",
        }
    }

    pub fn all() -> &'static [LlmProvider] {
        &[
            LlmProvider::Google,
            LlmProvider::OpenAI,
            LlmProvider::DeepSeek,
            LlmProvider::Custom,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            LlmProvider::Google => "Google",
            LlmProvider::OpenAI => "OpenAI",
            LlmProvider::DeepSeek => "DeepSeek",
            LlmProvider::Custom => "Custom",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_name(name: &str) -> Option<LlmProvider> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(name))
    }
}

const DEFAULT_CHAT_PROMPT: &str = r#"You are a friendly customer support agent for PicFlick,
an app that lets people try augmented-reality camera filters.
Answer questions about the filters, help with problems, and keep replies short.
"#;
