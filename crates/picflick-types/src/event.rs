use uuid::Uuid;

use crate::conversation::MessagePair;
use crate::error::AnalysisError;
use crate::sentiment::SentimentReport;

/// Results posted by background tasks.
/// The UI drains these each frame and applies them to its state.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The provider answered a chat message
    ChatReply { request_id: Uuid, pair: MessagePair },

    /// A chat message could not be answered
    ChatFailed { request_id: Uuid, message: String },

    /// A sentiment analysis produced a validated report
    AnalysisComplete {
        request_id: Uuid,
        report: SentimentReport,
        turns: usize,
    },

    /// A sentiment analysis failed
    AnalysisFailed { request_id: Uuid, error: AnalysisError },
}

impl AppEvent {
    pub fn request_id(&self) -> Uuid {
        match self {
            AppEvent::ChatReply { request_id, .. }
            | AppEvent::ChatFailed { request_id, .. }
            | AppEvent::AnalysisComplete { request_id, .. }
            | AppEvent::AnalysisFailed { request_id, .. } => *request_id,
        }
    }
}
