//! Browser adapters for the ports defined in `picflick-core`.
//!
//! Everything here talks to the outside world through `fetch` and browser
//! timers, so it only does useful work on `wasm32-unknown-unknown`. The
//! request/response codecs are plain functions and are tested natively.

pub mod llm;

#[cfg(test)]
mod tests;
