//! Validation of model output into a [`SentimentReport`].

use serde_json::{Map, Value};

use picflick_types::conversation::ConversationHistory;
use picflick_types::error::AnalysisError;
use picflick_types::sentiment::{Emotion, Highlight, SentimentReport, REQUIRED_KEYS};

use super::normalize::strip_code_fences;

type Result<T> = std::result::Result<T, AnalysisError>;

/// Parse raw model text into a report about `history`.
///
/// Fails without a partial report: malformed JSON, a missing key or an
/// unusable value each yield a distinct [`AnalysisError`].
pub fn parse_report(raw: &str, history: &ConversationHistory) -> Result<SentimentReport> {
    let cleaned = strip_code_fences(raw);

    let value: Value =
        serde_json::from_str(cleaned).map_err(|e| AnalysisError::MalformedOutput {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    let Value::Object(fields) = value else {
        return Err(AnalysisError::MalformedOutput {
            reason: "expected a JSON object".to_string(),
            raw: raw.to_string(),
        });
    };

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !fields.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AnalysisError::IncompleteAnalysis { missing });
    }

    let overall_score = score("overall_score", &fields["overall_score"])?;
    let dominant_emotion = emotion(&fields["dominant_emotion"])?;
    let top_positive = highlight("top_positive", &fields["top_positive"], history)?;
    let top_negative = highlight("top_negative", &fields["top_negative"], history)?;
    let sentiment_trend = trend(&fields, history)?;

    Ok(SentimentReport {
        overall_score,
        dominant_emotion,
        top_positive,
        top_negative,
        sentiment_trend,
    })
}

/// Read a score and clamp it into [-1, 1]
fn score(field: &str, value: &Value) -> Result<f64> {
    let n = value.as_f64().ok_or_else(|| {
        AnalysisError::invalid_field(field, format!("expected a number, got {value}"))
    })?;
    if !n.is_finite() {
        return Err(AnalysisError::invalid_field(field, "score is not finite"));
    }
    let clamped = n.clamp(-1.0, 1.0);
    if clamped != n {
        log::warn!("{field} {n} outside [-1, 1], clamped to {clamped}");
    }
    Ok(clamped)
}

fn emotion(value: &Value) -> Result<Emotion> {
    let field = "dominant_emotion";
    let text = value.as_str().ok_or_else(|| {
        AnalysisError::invalid_field(field, format!("expected a string, got {value}"))
    })?;
    text.parse::<Emotion>()
        .map_err(|e| AnalysisError::invalid_field(field, e.to_string()))
}

/// Resolve a quoted user message against the history.
///
/// Models sometimes paraphrase instead of quoting; a reference that matches
/// no message becomes an empty highlight rather than an error.
fn highlight(
    field: &str,
    value: &Value,
    history: &ConversationHistory,
) -> Result<Option<Highlight>> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.as_str(),
        other => {
            return Err(AnalysisError::invalid_field(
                field,
                format!("expected a string or null, got {other}"),
            ))
        }
    };
    if text.trim().is_empty() {
        return Ok(None);
    }

    match history.find_by_user(text) {
        Some((turn, pair)) => Ok(Some(Highlight {
            turn,
            user: pair.user.clone(),
            agent: pair.agent.clone(),
        })),
        None => {
            log::warn!("{field} references a message not in the conversation: {text:?}");
            Ok(None)
        }
    }
}

fn trend(fields: &Map<String, Value>, history: &ConversationHistory) -> Result<Vec<f64>> {
    let field = "sentiment_trend";
    let value = &fields[field];
    let items = value.as_array().ok_or_else(|| {
        AnalysisError::invalid_field(field, format!("expected an array, got {value}"))
    })?;

    let trend = items
        .iter()
        .map(|item| score(field, item))
        .collect::<Result<Vec<f64>>>()?;

    if trend.len() != history.len() {
        log::debug!(
            "sentiment_trend has {} entries for {} message pairs",
            trend.len(),
            history.len()
        );
    }
    Ok(trend)
}
