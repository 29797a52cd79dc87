//! UI-level state that drives rendering.
//!
//! Owns the conversation history and the result of the last analysis.
//! Background tasks never touch it directly: they post `AppEvent`s which
//! are applied here once per frame, and results tagged with a request id
//! that is no longer current are dropped.

use chrono::{DateTime, Local};
use uuid::Uuid;

use picflick_core::catalog;
use picflick_types::conversation::ConversationHistory;
use picflick_types::error::AnalysisError;
use picflick_types::event::AppEvent;
use picflick_types::filter::{ArFilter, FilterCategory};
use picflick_types::sentiment::SentimentReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Gallery(FilterCategory),
    Chat,
    Insights,
}

impl Page {
    pub fn all() -> [Page; 5] {
        [
            Page::Gallery(FilterCategory::FaceFilters),
            Page::Gallery(FilterCategory::FaceDeform),
            Page::Gallery(FilterCategory::Overlays),
            Page::Chat,
            Page::Insights,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Gallery(category) => category.label(),
            Page::Chat => "Chat",
            Page::Insights => "Insights",
        }
    }
}

/// Per-gallery selection and search box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    /// Id of the filter shown as an expanded card
    pub selected: Option<u32>,
    pub search_query: String,
    /// The last search matched nothing
    pub search_miss: bool,
}

/// What the insights page shows
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisView {
    Idle,
    /// Analysis was requested with nothing to analyze
    NoHistory,
    Running {
        request_id: Uuid,
        /// The history handed to the request
        history: ConversationHistory,
    },
    Ready {
        report: SentimentReport,
        turns: usize,
        /// The history the report was computed from
        history: ConversationHistory,
        analyzed_at: DateTime<Local>,
    },
    Failed(AnalysisError),
}

/// A snapshot handed to the background analysis task
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub history: ConversationHistory,
}

/// A chat message handed to the background exchange task
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTicket {
    pub id: Uuid,
    pub history: ConversationHistory,
    pub input: String,
}

/// The user message awaiting a reply
#[derive(Debug, Clone, PartialEq)]
pub struct PendingChat {
    pub id: Uuid,
    pub text: String,
}

/// State visible to UI panels
pub struct AppState {
    pub page: Page,
    galleries: [GalleryState; 3],
    /// Completed message pairs, oldest first
    pub history: ConversationHistory,
    /// Chat input field content
    pub chat_input: String,
    pub chat_pending: Option<PendingChat>,
    pub chat_error: Option<String>,
    pub analysis: AnalysisView,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Status line text
    pub status_text: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: Page::Gallery(FilterCategory::FaceFilters),
            galleries: Default::default(),
            history: ConversationHistory::new(),
            chat_input: String::new(),
            chat_pending: None,
            chat_error: None,
            analysis: AnalysisView::Idle,
            show_settings: false,
            status_text: "Ready".to_string(),
        }
    }

    // ─── Galleries ───────────────────────────────────────────

    pub fn gallery(&self, category: FilterCategory) -> &GalleryState {
        &self.galleries[gallery_slot(category)]
    }

    pub fn gallery_mut(&mut self, category: FilterCategory) -> &mut GalleryState {
        &mut self.galleries[gallery_slot(category)]
    }

    pub fn select_filter(&mut self, category: FilterCategory, id: u32) {
        if catalog::find(category, id).is_some() {
            self.gallery_mut(category).selected = Some(id);
        }
    }

    pub fn close_card(&mut self, category: FilterCategory) {
        self.gallery_mut(category).selected = None;
    }

    pub fn selected_filter(&self, category: FilterCategory) -> Option<&'static ArFilter> {
        self.gallery(category)
            .selected
            .and_then(|id| catalog::find(category, id))
    }

    /// Run the gallery's search box: the first match becomes the expanded card.
    pub fn apply_search(&mut self, category: FilterCategory) -> Option<&'static ArFilter> {
        let gallery = self.gallery_mut(category);
        if gallery.search_query.trim().is_empty() {
            gallery.search_miss = false;
            return None;
        }

        let found = catalog::search(category, &gallery.search_query);
        gallery.search_miss = found.is_none();
        if let Some(f) = found {
            gallery.selected = Some(f.id);
        }
        found
    }

    // ─── Navigation and analysis ─────────────────────────────

    /// Switch pages. Entering the insights page starts an analysis.
    pub fn navigate(&mut self, page: Page) -> Option<AnalysisRequest> {
        if self.page == page {
            return None;
        }
        log::debug!("Navigating to {}", page.label());
        self.page = page;

        if page == Page::Insights {
            self.begin_analysis()
        } else {
            None
        }
    }

    /// Snapshot the history for analysis.
    ///
    /// Returns `None` when the history is empty or a request for this same
    /// history is already running. A running request over an older history
    /// is superseded: its id stops being current, so at most one result is
    /// ever applied.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if self.history.is_empty() {
            self.analysis = AnalysisView::NoHistory;
            return None;
        }
        if let AnalysisView::Running { request_id, history } = &self.analysis {
            if *history == self.history {
                log::debug!("Analysis already running");
                return None;
            }
            log::debug!("History changed; superseding analysis {}", request_id);
        }

        let id = Uuid::new_v4();
        let history = self.history.clone();
        self.analysis = AnalysisView::Running {
            request_id: id,
            history: history.clone(),
        };
        self.status_text = "Analyzing conversation...".to_string();
        Some(AnalysisRequest { id, history })
    }

    // ─── Chat ────────────────────────────────────────────────

    /// Start a chat exchange. `None` for blank input or while a reply is pending.
    pub fn submit_chat(&mut self, text: &str) -> Option<ChatTicket> {
        let text = text.trim();
        if text.is_empty() || self.chat_pending.is_some() {
            return None;
        }

        let id = Uuid::new_v4();
        self.chat_pending = Some(PendingChat {
            id,
            text: text.to_string(),
        });
        self.chat_error = None;
        self.status_text = "Waiting for reply...".to_string();
        Some(ChatTicket {
            id,
            history: self.history.clone(),
            input: text.to_string(),
        })
    }

    /// Forget the conversation. Replies and analyses still in flight are
    /// ignored when they arrive.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.chat_pending = None;
        self.chat_error = None;
        self.analysis = if self.page == Page::Insights {
            AnalysisView::NoHistory
        } else {
            AnalysisView::Idle
        };
        self.status_text = "Ready".to_string();
        log::info!("Conversation history cleared");
    }

    // ─── Events ──────────────────────────────────────────────

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<AppEvent>) {
        for event in events {
            match event {
                AppEvent::ChatReply { request_id, pair } => {
                    if !self.is_pending_chat(request_id) {
                        log::debug!("Discarding stale chat reply {}", request_id);
                        continue;
                    }
                    self.history.push(pair);
                    self.chat_pending = None;
                    self.status_text = "Ready".to_string();
                }
                AppEvent::ChatFailed { request_id, message } => {
                    if !self.is_pending_chat(request_id) {
                        log::debug!("Discarding stale chat failure {}", request_id);
                        continue;
                    }
                    if let Some(pending) = self.chat_pending.take() {
                        if self.chat_input.is_empty() {
                            self.chat_input = pending.text;
                        }
                    }
                    self.status_text = format!("Error: {}", message);
                    self.chat_error = Some(message);
                }
                AppEvent::AnalysisComplete {
                    request_id,
                    report,
                    turns,
                } => {
                    if !self.is_running_analysis(request_id) {
                        log::debug!("Discarding stale analysis {}", request_id);
                        continue;
                    }
                    let history = match std::mem::replace(&mut self.analysis, AnalysisView::Idle) {
                        AnalysisView::Running { history, .. } => history,
                        _ => ConversationHistory::new(),
                    };
                    self.analysis = AnalysisView::Ready {
                        report,
                        turns,
                        history,
                        analyzed_at: Local::now(),
                    };
                    self.status_text = "Ready".to_string();
                }
                AppEvent::AnalysisFailed { request_id, error } => {
                    if !self.is_running_analysis(request_id) {
                        log::debug!("Discarding stale analysis failure {}", request_id);
                        continue;
                    }
                    self.status_text = format!("Analysis failed: {}", error);
                    self.analysis = AnalysisView::Failed(error);
                }
            }
        }
    }

    fn is_pending_chat(&self, id: Uuid) -> bool {
        self.chat_pending.as_ref().is_some_and(|p| p.id == id)
    }

    fn is_running_analysis(&self, id: Uuid) -> bool {
        matches!(self.analysis, AnalysisView::Running { request_id, .. } if request_id == id)
    }

    pub fn is_busy(&self) -> bool {
        self.chat_pending.is_some() || matches!(self.analysis, AnalysisView::Running { .. })
    }
}

fn gallery_slot(category: FilterCategory) -> usize {
    match category {
        FilterCategory::FaceFilters => 0,
        FilterCategory::FaceDeform => 1,
        FilterCategory::Overlays => 2,
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
