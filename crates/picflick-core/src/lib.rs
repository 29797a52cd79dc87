//! PicFlick core: everything that does not touch the browser.
//!
//! The analyzer and the chat exchange talk to text-generation providers
//! only through [`ports::LlmPort`]; adapters live in `picflick-platform`.

pub mod ports;
pub mod sentiment;
pub mod catalog;
pub mod conversation;
pub mod event_bus;
