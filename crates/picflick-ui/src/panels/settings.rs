//! Settings panel: LLM provider, model, API key and request limits.
//! Nothing is persisted; edits last until the page reloads.

use egui::{self, RichText};

use picflick_core::sentiment::SentimentAnalyzer;
use picflick_types::config::{AppConfig, LlmProvider, DEFAULT_TIMEOUT_MS};

use crate::theme::*;

/// Render the settings panel. Returns true when the caller should rebuild
/// the provider from the edited config.
pub fn settings_panel(ui: &mut egui::Ui, config: &mut AppConfig) -> bool {
    let mut changed = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── LLM Section ──────────────────────────────────
            ui.label(RichText::new("LLM").color(ACCENT).strong());
            ui.add_space(2.0);

            // Provider
            ui.label(RichText::new("Provider").color(TEXT_SECONDARY).small());
            let before = config.llm.provider;
            egui::ComboBox::from_id_salt("llm_provider")
                .selected_text(config.llm.provider.label())
                .show_ui(ui, |ui| {
                    for p in LlmProvider::all() {
                        ui.selectable_value(&mut config.llm.provider, *p, p.label());
                    }
                });
            if config.llm.provider != before {
                config.llm.model = config.llm.provider.default_model().to_string();
                changed = true;
            }

            ui.add_space(4.0);

            // Model
            ui.label(RichText::new("Model").color(TEXT_SECONDARY).small());
            if ui.text_edit_singleline(&mut config.llm.model).changed() {
                changed = true;
            }

            ui.add_space(4.0);

            // API Key (masked)
            ui.label(RichText::new("API Key").color(TEXT_SECONDARY).small());
            let hint = match config.llm.provider {
                LlmProvider::Google => "AIza...",
                _ => "sk-...",
            };
            let api_key_edit = egui::TextEdit::singleline(&mut config.llm.api_key)
                .password(true)
                .hint_text(hint);
            if ui.add(api_key_edit).changed() {
                changed = true;
            }
            if config.llm.api_key.is_empty() {
                ui.label(
                    RichText::new("No API key: requests will be rejected by the provider")
                        .color(WARNING)
                        .small(),
                );
            }

            ui.add_space(4.0);

            // Custom base URL
            ui.label(RichText::new("API Base URL (optional)").color(TEXT_SECONDARY).small());
            let mut base_url = config.llm.api_base.clone().unwrap_or_default();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut base_url)
                        .hint_text(config.llm.provider.default_base_url()),
                )
                .changed()
            {
                config.llm.api_base = if base_url.trim().is_empty() {
                    None
                } else {
                    Some(base_url)
                };
                changed = true;
            }

            ui.add_space(4.0);

            // Temperature
            ui.label(RichText::new("Chat Temperature").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.llm.temperature, 0.0..=2.0))
                .changed()
            {
                changed = true;
            }
            ui.label(
                RichText::new(format!(
                    "Sentiment analysis always runs at {}",
                    SentimentAnalyzer::TEMPERATURE
                ))
                .color(TEXT_SECONDARY)
                .small()
                .italics(),
            );

            // Max tokens
            ui.label(RichText::new("Max Tokens").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.llm.max_tokens, 256..=32768))
                .changed()
            {
                changed = true;
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Timeout Section ──────────────────────────────
            ui.label(RichText::new("Requests").color(ACCENT).strong());
            ui.add_space(2.0);

            let mut limited = config.llm.timeout_ms.is_some();
            if ui.checkbox(&mut limited, "Time out slow requests").changed() {
                config.llm.timeout_ms = limited.then_some(DEFAULT_TIMEOUT_MS);
                changed = true;
            }
            if let Some(ms) = config.llm.timeout_ms.as_mut() {
                let mut secs = *ms / 1000;
                if ui
                    .add(egui::Slider::new(&mut secs, 5..=300).suffix(" s"))
                    .changed()
                {
                    *ms = secs * 1000;
                    changed = true;
                }
            }
        });

    changed
}
