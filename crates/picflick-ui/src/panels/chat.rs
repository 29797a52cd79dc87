//! Chat panel: the conversation with the support agent and input field.

use egui::{self, Align, Color32, Layout, RichText, ScrollArea, Vec2};

use crate::state::{AppState, ChatTicket};
use crate::theme::*;

/// Render the chat panel. Returns a ticket when the user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<ChatTicket> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Support Chat").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let can_clear = !state.history.is_empty() || state.chat_pending.is_some();
                        if ui
                            .add_enabled(can_clear, egui::Button::new("Clear history"))
                            .clicked()
                        {
                            state.clear_history();
                        }
                        ui.label(
                            RichText::new(format!("{} turns", state.history.len()))
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.history.is_empty() && state.chat_pending.is_none() {
                            ui.label(
                                RichText::new("Ask about a filter or report a problem to start.")
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }

                        for pair in state.history.pairs() {
                            render_message(ui, "You", ACCENT, BG_SECONDARY, &pair.user);
                            ui.add_space(4.0);
                            render_message(ui, "Agent", SUCCESS, BG_SECONDARY, &pair.agent);
                            ui.add_space(4.0);
                        }

                        if let Some(pending) = &state.chat_pending {
                            render_message(ui, "You", ACCENT, BG_SECONDARY, &pending.text);
                            ui.add_space(4.0);
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Agent is typing...").color(TEXT_SECONDARY));
                            });
                        }

                        if let Some(error) = &state.chat_error {
                            let error_bg = Color32::from_rgb(50, 20, 20);
                            render_message(ui, "Error", ERROR, error_bg, error);
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.chat_input)
                        .hint_text("Type a message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled =
                        !state.chat_input.trim().is_empty() && state.chat_pending.is_none();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let enter =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (enter || send_btn.clicked()) {
                        let text = std::mem::take(&mut state.chat_input);
                        submitted = state.submit_chat(&text);
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, label: &str, label_color: Color32, bg: Color32, text: &str) {
    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(text).color(TEXT_PRIMARY));
        });
}
