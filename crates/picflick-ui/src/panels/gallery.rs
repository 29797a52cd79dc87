//! Filter gallery: a grid of cards per category, an expanded card for the
//! selected filter, and a name search.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use picflick_core::catalog;
use picflick_types::filter::{ArFilter, FilterCategory};

use crate::state::AppState;
use crate::theme::*;

const COLUMNS: usize = 3;

pub fn gallery_panel(ui: &mut egui::Ui, state: &mut AppState, category: FilterCategory) {
    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new(category.label()).color(TEXT_PRIMARY).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    search_box(ui, state, category);
                });
            });
            ui.label(RichText::new(category.subtitle()).color(TEXT_SECONDARY));
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match state.selected_filter(category) {
                    Some(filter) => {
                        if expanded_card(ui, filter) {
                            state.close_card(category);
                        }
                    }
                    None => {
                        if let Some(id) = card_grid(ui, catalog::filters(category)) {
                            state.select_filter(category, id);
                        }
                    }
                });
        });
}

fn search_box(ui: &mut egui::Ui, state: &mut AppState, category: FilterCategory) {
    let gallery = state.gallery_mut(category);
    if gallery.search_miss {
        ui.label(RichText::new("No filter found").color(WARNING).small());
    }

    let response = ui.add(
        egui::TextEdit::singleline(&mut gallery.search_query)
            .hint_text("🔍 Search filters")
            .desired_width(200.0),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        if let Some(found) = state.apply_search(category) {
            log::debug!("Search selected {}", found.name);
        }
    }
}

/// Returns the id of the card whose select button was clicked
fn card_grid(ui: &mut egui::Ui, filters: &'static [ArFilter]) -> Option<u32> {
    let mut clicked = None;

    for row in filters.chunks(COLUMNS) {
        ui.columns(COLUMNS, |cols| {
            for (col, filter) in cols.iter_mut().zip(row) {
                egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(col, |ui| {
                        thumbnail(ui, filter, CARD_IMAGE_HEIGHT);
                        ui.label(RichText::new(filter.name).color(TEXT_PRIMARY).strong().size(16.0));
                        ui.label(RichText::new(filter.short_desc).color(TEXT_SECONDARY));
                        ui.add_space(4.0);
                        if ui.button(format!("Select {}", filter.name)).clicked() {
                            clicked = Some(filter.id);
                        }
                    });
            }
        });
        ui.add_space(8.0);
    }

    clicked
}

/// Returns true when the close button was clicked
fn expanded_card(ui: &mut egui::Ui, filter: &ArFilter) -> bool {
    let mut close = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(15.0)
        .show(ui, |ui| {
            if ui.button("Close the currently opened card").clicked() {
                close = true;
            }
            ui.add_space(8.0);

            ui.columns(2, |cols| {
                thumbnail(&mut cols[0], filter, CARD_IMAGE_HEIGHT * 2.0);

                let ui = &mut cols[1];
                ui.heading(RichText::new(filter.name).color(TEXT_PRIMARY).strong());
                ui.label(RichText::new(filter.rating_line()).color(WARNING));
                ui.add_space(6.0);
                ui.label(RichText::new(filter.long_desc).color(TEXT_PRIMARY));
                ui.add_space(10.0);

                let open = ui.add(
                    egui::Button::new(RichText::new("OPEN FILTER").color(TEXT_PRIMARY).strong())
                        .fill(LINK_BUTTON)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 32.0)),
                );
                if open.clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(filter.link));
                }
                open.on_hover_text(filter.link);
            });
        });

    close
}

fn thumbnail(ui: &mut egui::Ui, filter: &ArFilter, max_height: f32) {
    if filter.is_remote_image() {
        ui.add(
            egui::Image::new(filter.image_url)
                .max_height(max_height)
                .maintain_aspect_ratio(true)
                .corner_radius(PANEL_ROUNDING),
        );
    } else {
        ui.label(RichText::new("Could not load image").color(ERROR).small());
    }
}
