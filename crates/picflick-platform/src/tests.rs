#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::llm::{gemini, openai_compat, GeminiProvider};
    use picflick_core::ports::ChatRequest;
    use picflick_core::sentiment::SentimentAnalyzer;
    use picflick_types::conversation::{ConversationHistory, MessagePair};
    use picflick_types::config::{LlmConfig, LlmProvider};
    use picflick_types::error::AppError;
    use picflick_types::message::*;

    fn request() -> ChatRequest {
        ChatRequest {
            messages: vec![
                Message::system("Be brief."),
                Message::user("Hi"),
                Message::assistant("Hello!"),
                Message::user("Which filter is best?"),
            ],
            model: "test-model".to_string(),
            max_tokens: 256,
            temperature: 0.5,
        }
    }

    // ─── OpenAI-compatible Codec Tests ───────────────────────

    #[test]
    fn test_openai_request_body() {
        let body = openai_compat::build_request_body(&request());
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["max_tokens"], 256);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["messages"].as_array().unwrap().len(), 4);
        assert_eq!(body["messages"][0], json!({"role": "system", "content": "Be brief."}));
        assert_eq!(body["messages"][2]["role"], "assistant");
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_openai_parse_response() {
        let raw = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Try Big Eye."}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
        }"#;
        let resp = openai_compat::parse_response(raw).unwrap();
        assert_eq!(resp.message, Message::assistant("Try Big Eye."));
        assert_eq!(resp.usage.unwrap().total_tokens, 16);
    }

    #[test]
    fn test_openai_parse_null_content() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let resp = openai_compat::parse_response(raw).unwrap();
        assert_eq!(resp.message.content, "");
        assert!(resp.usage.is_none());
    }

    #[test]
    fn test_openai_parse_no_choices() {
        let err = openai_compat::parse_response(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, AppError::Llm(ref m) if m.contains("No choices")));
    }

    #[test]
    fn test_openai_parse_garbage() {
        assert!(matches!(
            openai_compat::parse_response("<html>502</html>"),
            Err(AppError::Llm(_))
        ));
    }

    #[test]
    fn test_openai_endpoint_uses_base_override() {
        let config = LlmConfig {
            provider: LlmProvider::Custom,
            api_base: Some("http://localhost:11434/".to_string()),
            ..LlmConfig::default()
        };
        let provider = openai_compat::OpenAiCompatProvider::new(config);
        assert_eq!(provider.endpoint(), "http://localhost:11434/v1/chat/completions");
    }

    // ─── Gemini Codec Tests ──────────────────────────────────

    #[test]
    fn test_gemini_request_body() {
        let body = gemini::build_request_body(&request());
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0], json!({"role": "user", "parts": [{"text": "Hi"}]}));
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
    }

    #[test]
    fn test_gemini_request_without_system() {
        let req = ChatRequest {
            messages: vec![Message::user("Analyze this")],
            model: "gemini-1.5-flash".to_string(),
            max_tokens: 2048,
            temperature: 0.3,
        };
        let body = gemini::build_request_body(&req);
        assert!(body.get("systemInstruction").is_none());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Analyze this");
    }

    #[test]
    fn test_gemini_parse_response_joins_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "```json\n{"}, {"text": "}\n```"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 100, "candidatesTokenCount": 20, "totalTokenCount": 120}
        }"#;
        let resp = gemini::parse_response(raw).unwrap();
        assert_eq!(resp.message.role, Role::Assistant);
        assert_eq!(resp.message.content, "```json\n{}\n```");
        let usage = resp.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 100);
        assert_eq!(usage.completion_tokens, 20);
        assert_eq!(usage.total_tokens, 120);
    }

    #[test]
    fn test_gemini_parse_blocked_prompt() {
        let raw = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let err = gemini::parse_response(raw).unwrap_err();
        assert!(matches!(err, AppError::Llm(ref m) if m.contains("SAFETY")));
    }

    #[test]
    fn test_gemini_parse_candidate_without_content() {
        let raw = r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#;
        let resp = gemini::parse_response(raw).unwrap();
        assert!(resp.message.content.is_empty());
    }

    #[test]
    fn test_gemini_endpoint() {
        let provider = GeminiProvider::new(LlmConfig::default());
        assert_eq!(
            provider.endpoint("models/gemini-1.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_analysis_temperature_serializes_exactly() {
        let history = ConversationHistory::from(vec![MessagePair::new("hi", "hello")]);
        let req = SentimentAnalyzer::new("gemini-1.5-flash", 1).request_for(&history);

        let gemini_body = gemini::build_request_body(&req);
        assert_eq!(gemini_body["generationConfig"]["temperature"].to_string(), "0.3");

        let openai_body = openai_compat::build_request_body(&req);
        assert_eq!(openai_body["temperature"].to_string(), "0.3");
    }

    #[test]
    fn test_chat_temperature_serializes_exactly() {
        let mut req = request();
        req.temperature = LlmConfig::default().temperature;
        let body = openai_compat::build_request_body(&req);
        assert_eq!(body["temperature"].to_string(), "0.7");
    }

    // ─── build_provider Tests ────────────────────────────────

    #[test]
    fn test_build_provider_dispatch() {
        let google = crate::llm::build_provider(&LlmConfig::default());
        assert_eq!(google.provider_name(), "Google Gemini");

        let deepseek = crate::llm::build_provider(&LlmConfig::from_vars(Some("deepseek"), None, None));
        assert_eq!(deepseek.provider_name(), "DeepSeek");
    }
}
