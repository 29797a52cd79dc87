//! Main egui application: page navigation, panels, and the background
//! tasks that talk to the LLM.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use picflick_core::conversation::exchange;
use picflick_core::event_bus::EventBus;
use picflick_core::ports::LlmPort;
use picflick_core::sentiment::SentimentAnalyzer;
use picflick_platform::llm::build_provider;
use picflick_types::config::AppConfig;
use picflick_types::event::AppEvent;
use picflick_ui::panels::{chat, gallery, insights, settings};
use picflick_ui::state::{AnalysisRequest, AppState, ChatTicket, Page};
use picflick_ui::theme;

/// The main application state
pub struct PicFlickApp {
    state: AppState,
    config: AppConfig,
    event_bus: EventBus,
    llm: Rc<dyn LlmPort>,
}

impl PicFlickApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::apply_theme(&cc.egui_ctx);

        let config = AppConfig::from_env();
        if config.llm.api_key.is_empty() {
            log::warn!("No API key configured; set one in Settings");
        }
        let llm = build_provider(&config.llm);

        // Results arrive between frames; wake the loop so they show up at once
        let ctx = cc.egui_ctx.clone();
        let event_bus = EventBus::with_wake(move || ctx.request_repaint());

        Self {
            state: AppState::new(),
            config,
            event_bus,
            llm,
        }
    }

    fn rebuild_llm(&mut self) {
        self.llm = build_provider(&self.config.llm);
    }
}

impl eframe::App for PicFlickApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain results posted by background tasks
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.state.process_events(events);
            ctx.request_repaint();
        }

        if self.state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        let mut analysis = None;
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("PicFlick")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                for page in Page::all() {
                    if ui
                        .selectable_label(self.state.page == page, page.label())
                        .clicked()
                    {
                        analysis = self.state.navigate(page);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.state.show_settings, "Settings")
                        .clicked()
                    {
                        self.state.show_settings = !self.state.show_settings;
                    }
                    ui.label(
                        RichText::new(format!(
                            "{} | {} | {}",
                            self.state.status_text,
                            self.config.llm.provider.label(),
                            self.config.llm.model
                        ))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                    );
                });
            });
        });
        if let Some(request) = analysis {
            self.dispatch_analysis(request);
        }

        // ── Settings side panel ──────────────────────────────
        if self.state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    if settings::settings_panel(ui, &mut self.config) {
                        self.rebuild_llm();
                    }
                });
        }

        // ── Main content ─────────────────────────────────────
        let mut ticket = None;
        let mut analysis = None;
        CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Gallery(category) => gallery::gallery_panel(ui, &mut self.state, category),
            Page::Chat => ticket = chat::chat_panel(ui, &mut self.state),
            Page::Insights => analysis = insights::insights_panel(ui, &mut self.state),
        });

        if let Some(ticket) = ticket {
            self.dispatch_chat(ticket);
        }
        if let Some(request) = analysis {
            self.dispatch_analysis(request);
        }
    }
}

impl PicFlickApp {
    /// Analyze a history snapshot in the background (async)
    fn dispatch_analysis(&self, request: AnalysisRequest) {
        let analyzer = SentimentAnalyzer::from_config(&self.config.llm);
        let llm = self.llm.clone();
        let event_bus = self.event_bus.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let turns = request.history.len();
            let event = match analyzer.analyze(llm.as_ref(), &request.history).await {
                Ok(report) => AppEvent::AnalysisComplete {
                    request_id: request.id,
                    report,
                    turns,
                },
                Err(error) => AppEvent::AnalysisFailed {
                    request_id: request.id,
                    error,
                },
            };
            event_bus.emit(event);
        });
    }

    /// Send a chat message to the provider (async)
    fn dispatch_chat(&self, ticket: ChatTicket) {
        let config = self.config.clone();
        let llm = self.llm.clone();
        let event_bus = self.event_bus.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let event = match exchange(llm.as_ref(), &config, &ticket.history, &ticket.input).await {
                Ok(pair) => AppEvent::ChatReply {
                    request_id: ticket.id,
                    pair,
                },
                Err(e) => {
                    log::error!("Chat request failed: {}", e);
                    AppEvent::ChatFailed {
                        request_id: ticket.id,
                        message: e.to_string(),
                    }
                }
            };
            event_bus.emit(event);
        });
    }
}
