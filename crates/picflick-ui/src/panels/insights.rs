//! Conversation insights: renders the sentiment report of the chat history.

use egui::{self, Align, Color32, Layout, Pos2, Rect, RichText, ScrollArea, Sense, Stroke, Vec2};

use picflick_types::conversation::ConversationHistory;
use picflick_types::error::AnalysisError;
use picflick_types::sentiment::{Highlight, SentimentReport};

use crate::state::{AnalysisRequest, AnalysisView, AppState};
use crate::theme::*;

const CHART_HEIGHT: f32 = 220.0;

/// Render the insights page. Returns a request when the user asks for a
/// fresh analysis.
pub fn insights_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<AnalysisRequest> {
    let mut rerun = false;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("📈 Conversation Insights").color(TEXT_PRIMARY).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let running = matches!(state.analysis, AnalysisView::Running { .. });
                    if ui
                        .add_enabled(!running && !state.history.is_empty(), egui::Button::new("Re-run"))
                        .clicked()
                    {
                        rerun = true;
                    }
                });
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &state.analysis {
                    AnalysisView::Idle => {
                        ui.label(
                            RichText::new("Press Re-run to analyze the conversation.")
                                .color(TEXT_SECONDARY),
                        );
                    }
                    AnalysisView::NoHistory => {
                        ui.label(
                            RichText::new("No conversation history found! Start chatting on the Chat page.")
                                .color(WARNING),
                        );
                    }
                    AnalysisView::Running { .. } => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(
                                RichText::new("Analyzing conversation patterns...")
                                    .color(TEXT_SECONDARY),
                            );
                        });
                    }
                    AnalysisView::Ready {
                        report,
                        turns,
                        history,
                        analyzed_at,
                    } => {
                        ui.label(
                            RichText::new(format!("Analyzed at {}", analyzed_at.format("%H:%M:%S")))
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                        report_view(ui, report, *turns, history);
                    }
                    AnalysisView::Failed(error) => failure_view(ui, error),
                });
        });

    if rerun {
        state.begin_analysis()
    } else {
        None
    }
}

fn report_view(
    ui: &mut egui::Ui,
    report: &SentimentReport,
    turns: usize,
    history: &ConversationHistory,
) {
    // Metrics row
    ui.columns(3, |cols| {
        metric(
            &mut cols[0],
            "Overall Sentiment",
            format!("{:.2}", report.overall_score),
            score_color(report.overall_score),
            "-1 (Negative) to 1 (Positive)",
        );
        metric(
            &mut cols[1],
            "Dominant Emotion",
            report.dominant_emotion.label().to_string(),
            TEXT_PRIMARY,
            "Most frequent emotion detected",
        );
        metric(
            &mut cols[2],
            "Conversation Turns",
            turns.to_string(),
            TEXT_PRIMARY,
            "Message pairs analyzed",
        );
    });

    ui.add_space(12.0);
    ui.label(RichText::new("Sentiment Progression").color(TEXT_PRIMARY).strong().size(18.0));
    sentiment_chart(ui, &report.sentiment_trend);

    ui.add_space(12.0);
    ui.label(RichText::new("Notable Interactions").color(TEXT_PRIMARY).strong().size(18.0));
    ui.columns(2, |cols| {
        interaction(
            &mut cols[0],
            "🌟 Most Positive Interaction",
            report.top_positive.as_ref(),
            "No positive interactions detected",
        );
        interaction(
            &mut cols[1],
            "⚠️ Most Negative Interaction",
            report.top_negative.as_ref(),
            "No negative interactions detected",
        );
    });

    ui.add_space(12.0);
    egui::CollapsingHeader::new("Technical Details")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(RichText::new("Raw Analysis Data").strong());
            code_block(ui, &pretty_json(report));
            ui.label(RichText::new("Conversation History").strong());
            code_block(ui, &pretty_json(history));
        });
}

fn metric(ui: &mut egui::Ui, title: &str, value: String, color: Color32, help: &str) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).color(TEXT_SECONDARY).small());
            ui.label(RichText::new(value).color(color).size(28.0).strong())
                .on_hover_text(help);
        });
}

fn interaction(ui: &mut egui::Ui, title: &str, highlight: Option<&Highlight>, empty: &str) {
    egui::CollapsingHeader::new(title)
        .default_open(true)
        .show(ui, |ui| match highlight {
            Some(h) => {
                ui.label(RichText::new(format!("User: {}", h.user)).color(TEXT_PRIMARY));
                ui.label(RichText::new(format!("Agent: {}", h.agent)).color(TEXT_SECONDARY));
            }
            None => {
                ui.label(RichText::new(empty).color(TEXT_SECONDARY).italics());
            }
        });
}

/// Line chart of per-turn scores on a fixed [-1, 1] axis
fn sentiment_chart(ui: &mut egui::Ui, trend: &[f64]) {
    let size = Vec2::new(ui.available_width(), CHART_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, PANEL_ROUNDING, BG_SECONDARY);

    let plot = rect.shrink2(Vec2::new(36.0, 14.0));
    for level in [-1.0, 0.0, 1.0] {
        let y = score_to_y(level, plot);
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(if level == 0.0 { 1.0 } else { 0.5 }, CHART_GRID),
        );
        painter.text(
            Pos2::new(rect.left() + 6.0, y),
            egui::Align2::LEFT_CENTER,
            format!("{level:+.0}"),
            egui::FontId::monospace(11.0),
            TEXT_SECONDARY,
        );
    }

    if trend.is_empty() {
        painter.text(
            plot.center(),
            egui::Align2::CENTER_CENTER,
            "No trend data",
            egui::FontId::proportional(13.0),
            TEXT_SECONDARY,
        );
        return;
    }

    let points = chart_points(trend, plot);
    if points.len() > 1 {
        painter.add(egui::Shape::line(points.clone(), Stroke::new(2.0, CHART_LINE)));
    }
    for p in points {
        painter.circle_filled(p, 3.5, CHART_LINE);
    }
}

/// Screen positions for `trend` inside `plot`, spread evenly left to right
pub fn chart_points(trend: &[f64], plot: Rect) -> Vec<Pos2> {
    let last = trend.len().saturating_sub(1);
    trend
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let x = if last == 0 {
                plot.center().x
            } else {
                plot.left() + plot.width() * i as f32 / last as f32
            };
            Pos2::new(x, score_to_y(*score, plot))
        })
        .collect()
}

fn score_to_y(score: f64, plot: Rect) -> f32 {
    let t = ((score.clamp(-1.0, 1.0) + 1.0) / 2.0) as f32;
    plot.bottom() - t * plot.height()
}

fn failure_view(ui: &mut egui::Ui, error: &AnalysisError) {
    match error {
        AnalysisError::MalformedOutput { reason, raw } => {
            ui.label(RichText::new(format!("JSON Parsing Error: {reason}")).color(ERROR));
            ui.label(RichText::new("Raw model response:").color(TEXT_SECONDARY).small());
            code_block(ui, raw);
        }
        AnalysisError::IncompleteAnalysis { missing } => {
            ui.label(RichText::new("Incomplete analysis from the model").color(ERROR));
            for key in missing {
                ui.label(RichText::new(format!("• missing {key}")).color(TEXT_SECONDARY));
            }
        }
        other => {
            ui.label(RichText::new(format!("Analysis Error: {other}")).color(ERROR));
        }
    }
}

fn code_block(ui: &mut egui::Ui, text: &str) {
    let mut text = text;
    ui.add(
        egui::TextEdit::multiline(&mut text)
            .code_editor()
            .desired_width(f32::INFINITY)
            .desired_rows(4),
    );
}

fn pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}
