//! egui panels and the UI state they render.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
