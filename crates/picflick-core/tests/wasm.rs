//! WASM-target tests for picflick-core.
//!
//! Runs EventBus, catalog and SentimentAnalyzer tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use picflick_core::catalog;
use picflick_core::event_bus::EventBus;
use picflick_core::ports::*;
use picflick_core::sentiment::{parse_report, strip_code_fences, SentimentAnalyzer};
use picflick_types::conversation::*;
use picflick_types::error::*;
use picflick_types::event::AppEvent;
use picflick_types::filter::FilterCategory;
use picflick_types::message::*;
use picflick_types::sentiment::Emotion;

use async_trait::async_trait;

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(AppEvent::ChatFailed {
        request_id: Default::default(),
        message: "offline".to_string(),
    });

    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
    assert!(!bus.has_pending());
}

// ─── Catalog Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn catalog_search_first_match() {
    let f = catalog::search(FilterCategory::Overlays, "effect").unwrap();
    assert_eq!(f.name, "Snow Effect");
}

#[wasm_bindgen_test]
fn catalog_find_by_id() {
    assert_eq!(catalog::find(FilterCategory::FaceDeform, 3).unwrap().name, "Green Eye");
}

// ─── Parsing Tests ───────────────────────────────────────

fn history() -> ConversationHistory {
    ConversationHistory::from(vec![
        MessagePair::new("Nothing works", "Let me check."),
        MessagePair::new("Thanks for the quick resolution!", "You're welcome!"),
    ])
}

const OUTPUT: &str = r#"```json
{"overall_score": 0.4, "dominant_emotion": "satisfied",
 "top_positive": "Thanks for the quick resolution!", "top_negative": "Nothing works",
 "sentiment_trend": [-0.6, 0.9]}
```"#;

#[wasm_bindgen_test]
fn strip_fences_json_tag() {
    assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
}

#[wasm_bindgen_test]
fn parse_fenced_report() {
    let report = parse_report(OUTPUT, &history()).unwrap();
    assert_eq!(report.dominant_emotion, Emotion::Satisfied);
    assert_eq!(report.top_positive.unwrap().turn, 1);
    assert_eq!(report.top_negative.unwrap().agent, "Let me check.");
}

#[wasm_bindgen_test]
fn parse_incomplete_report() {
    let err = parse_report(r#"{"overall_score": 0.1}"#, &history()).unwrap_err();
    match err {
        AnalysisError::IncompleteAnalysis { missing } => assert_eq!(missing.len(), 4),
        other => panic!("Wrong error: {:?}", other),
    }
}

// ─── SentimentAnalyzer Tests ─────────────────────────────

struct MockLlm;

#[async_trait(?Send)]
impl LlmPort for MockLlm {
    async fn chat_completion(&self, req: ChatRequest) -> picflick_types::Result<ChatResponse> {
        assert_eq!(req.temperature, SentimentAnalyzer::TEMPERATURE);
        Ok(ChatResponse {
            message: Message::assistant(OUTPUT),
            usage: None,
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[wasm_bindgen_test]
async fn analyzer_returns_report() {
    let analyzer = SentimentAnalyzer::new("mock-model", 512);
    let report = analyzer.analyze(&MockLlm, &history()).await.unwrap();
    assert!(report.overall_score > 0.0);
    assert_eq!(report.sentiment_trend.len(), 2);
}

#[wasm_bindgen_test]
async fn analyzer_rejects_empty_history() {
    let analyzer = SentimentAnalyzer::new("mock-model", 512);
    let err = analyzer
        .analyze(&MockLlm, &ConversationHistory::new())
        .await
        .unwrap_err();
    assert_eq!(err, AnalysisError::EmptyHistory);
}
