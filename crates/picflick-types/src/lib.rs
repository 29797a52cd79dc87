pub mod message;
pub mod conversation;
pub mod sentiment;
pub mod filter;
pub mod event;
pub mod config;
pub mod error;


pub use error::{AnalysisError, AppError};
pub type Result<T> = std::result::Result<T, AppError>;
