//! Conversation log produced by the chat page and read by the analyzer.

use serde::{Deserialize, Serialize};

/// One user utterance and the agent reply that answered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePair {
    pub user: String,
    #[serde(alias = "chatbot")]
    pub agent: String,
}

impl MessagePair {
    pub fn new(user: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            agent: agent.into(),
        }
    }
}

/// Chronologically ordered message pairs.
///
/// Pairs are append-only; the analyzer only ever sees a cloned snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    pairs: Vec<MessagePair>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: MessagePair) {
        self.pairs.push(pair);
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[MessagePair] {
        &self.pairs
    }

    pub fn user_texts(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.user.as_str()).collect()
    }

    pub fn agent_texts(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.agent.as_str()).collect()
    }

    /// Find the first pair whose user text matches `text`.
    ///
    /// Exact matches win; otherwise surrounding whitespace is ignored on both
    /// sides, since models tend to trim quoted messages.
    pub fn find_by_user(&self, text: &str) -> Option<(usize, &MessagePair)> {
        self.pairs
            .iter()
            .enumerate()
            .find(|(_, p)| p.user == text)
            .or_else(|| {
                let wanted = text.trim();
                self.pairs
                    .iter()
                    .enumerate()
                    .find(|(_, p)| p.user.trim() == wanted)
            })
    }
}

impl From<Vec<MessagePair>> for ConversationHistory {
    fn from(pairs: Vec<MessagePair>) -> Self {
        Self { pairs }
    }
}

impl FromIterator<MessagePair> for ConversationHistory {
    fn from_iter<I: IntoIterator<Item = MessagePair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
