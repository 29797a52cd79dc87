pub mod chat;
pub mod gallery;
pub mod insights;
pub mod settings;
