use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keys the model must return, in the order they are reported when missing.
pub const REQUIRED_KEYS: [&str; 5] = [
    "overall_score",
    "dominant_emotion",
    "top_positive",
    "top_negative",
    "sentiment_trend",
];

/// Dominant emotion detected across a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Frustrated,
    Satisfied,
    Confused,
    Neutral,
    Angry,
}

impl Emotion {
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Frustrated,
            Emotion::Satisfied,
            Emotion::Confused,
            Emotion::Neutral,
            Emotion::Angry,
        ]
    }

    /// Wire name, as used in the prompt and the model output
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Frustrated => "frustrated",
            Emotion::Satisfied => "satisfied",
            Emotion::Confused => "confused",
            Emotion::Neutral => "neutral",
            Emotion::Angry => "angry",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Frustrated => "Frustrated",
            Emotion::Satisfied => "Satisfied",
            Emotion::Confused => "Confused",
            Emotion::Neutral => "Neutral",
            Emotion::Angry => "Angry",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmotion(pub String);

impl fmt::Display for UnknownEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown emotion '{}'", self.0)
    }
}

impl std::error::Error for UnknownEmotion {}

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Emotion::all()
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}

/// A history entry the model singled out as most positive or most negative.
/// `user` is copied from the history, never from the model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub turn: usize,
    pub user: String,
    pub agent: String,
}

/// Validated result of one sentiment analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// -1.0 (negative) to 1.0 (positive)
    pub overall_score: f64,
    pub dominant_emotion: Emotion,
    pub top_positive: Option<Highlight>,
    pub top_negative: Option<Highlight>,
    /// One score per message pair, in conversation order
    pub sentiment_trend: Vec<f64>,
}
