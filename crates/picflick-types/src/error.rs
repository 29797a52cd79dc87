use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

/// Why a sentiment analysis produced no report.
/// Every variant is terminal for the call that returned it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("No conversation history to analyze")]
    EmptyHistory,

    #[error("Malformed model output: {reason}")]
    MalformedOutput { reason: String, raw: String },

    #[error("Incomplete analysis: missing {}", .missing.join(", "))]
    IncompleteAnalysis { missing: Vec<String> },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Analysis request failed: {0}")]
    Transport(#[from] AppError),
}

impl AnalysisError {
    /// Raw model text kept for diagnosis, if any
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            AnalysisError::MalformedOutput { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
