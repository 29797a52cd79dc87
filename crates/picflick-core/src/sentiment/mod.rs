//! Conversation sentiment analysis delegated to a text-generation provider.
//!
//! The pipeline is: history → [`prompt::build_prompt`] → provider →
//! [`normalize::strip_code_fences`] → [`parse::parse_report`].

pub mod prompt;
pub mod normalize;
pub mod parse;
pub mod analyzer;

pub use analyzer::SentimentAnalyzer;
pub use normalize::strip_code_fences;
pub use parse::parse_report;
pub use prompt::build_prompt;
