use picflick_types::conversation::ConversationHistory;
use picflick_types::sentiment::Emotion;

const EXAMPLE_RESPONSE: &str = r#"{
    "overall_score": 0.45,
    "dominant_emotion": "frustrated",
    "top_positive": "Thanks for the quick resolution!",
    "top_negative": "This service is terrible!",
    "sentiment_trend": [0.2, -0.5, 0.8]
}"#;

/// Build the analysis instruction for `history`.
///
/// User and agent texts are embedded as two JSON arrays in conversation
/// order, so quotes and newlines inside messages cannot break the layout.
pub fn build_prompt(history: &ConversationHistory) -> String {
    let user_messages = json_list(&history.user_texts());
    let agent_messages = json_list(&history.agent_texts());
    let emotions = Emotion::all()
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze this customer support conversation. Return JSON with:\n\
         - overall_score: float between -1 (negative) and 1 (positive)\n\
         - dominant_emotion: string from [{emotions}]\n\
         - top_positive: most positive user message text, copied exactly\n\
         - top_negative: most negative user message text, copied exactly\n\
         - sentiment_trend: list of floats representing score for each message pair\n\
         \n\
         Example valid response:\n\
         {EXAMPLE_RESPONSE}\n\
         \n\
         Conversation History:\n\
         User Messages: {user_messages}\n\
         Agent Responses: {agent_messages}\n\
         \n\
         Return only plain JSON without any formatting or comments:"
    )
}

fn json_list(items: &[&str]) -> String {
    // Serializing a slice of strings cannot fail
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
