#[cfg(test)]
mod tests {
    use egui::{Pos2, Rect};
    use uuid::Uuid;

    use crate::panels::insights::chart_points;
    use crate::state::*;
    use picflick_types::conversation::MessagePair;
    use picflick_types::error::{AnalysisError, AppError};
    use picflick_types::event::AppEvent;
    use picflick_types::filter::FilterCategory;
    use picflick_types::sentiment::{Emotion, SentimentReport};

    fn report() -> SentimentReport {
        SentimentReport {
            overall_score: 0.5,
            dominant_emotion: Emotion::Satisfied,
            top_positive: None,
            top_negative: None,
            sentiment_trend: vec![0.5],
        }
    }

    fn state_with_history() -> AppState {
        let mut state = AppState::new();
        state.history.push(MessagePair::new("Thanks for the quick resolution!", "You're welcome!"));
        state
    }

    // ─── Initial State Tests ─────────────────────────────────

    #[test]
    fn test_app_state_initial() {
        let state = AppState::new();
        assert_eq!(state.page, Page::Gallery(FilterCategory::FaceFilters));
        assert!(state.history.is_empty());
        assert!(state.chat_input.is_empty());
        assert!(state.chat_pending.is_none());
        assert_eq!(state.analysis, AnalysisView::Idle);
        assert!(!state.show_settings);
        assert_eq!(state.status_text, "Ready");
        assert!(!state.is_busy());
        for category in FilterCategory::all() {
            assert_eq!(state.gallery(*category), &GalleryState::default());
        }
    }

    #[test]
    fn test_pages() {
        let pages = Page::all();
        assert_eq!(pages.len(), 5);
        assert_eq!(pages[2].label(), FilterCategory::Overlays.label());
        assert_eq!(Page::Insights.label(), "Insights");
    }

    // ─── Gallery Tests ───────────────────────────────────────

    #[test]
    fn test_select_and_close_card() {
        let mut state = AppState::new();
        state.select_filter(FilterCategory::FaceDeform, 2);
        assert_eq!(state.selected_filter(FilterCategory::FaceDeform).unwrap().name, "Big Eye");
        // other galleries keep their own selection
        assert!(state.selected_filter(FilterCategory::FaceFilters).is_none());

        state.close_card(FilterCategory::FaceDeform);
        assert!(state.selected_filter(FilterCategory::FaceDeform).is_none());
    }

    #[test]
    fn test_select_unknown_id_ignored() {
        let mut state = AppState::new();
        state.select_filter(FilterCategory::FaceFilters, 99);
        assert!(state.gallery(FilterCategory::FaceFilters).selected.is_none());
    }

    #[test]
    fn test_search_selects_first_match() {
        let mut state = AppState::new();
        state.gallery_mut(FilterCategory::Overlays).search_query = "EFFECT".to_string();
        let found = state.apply_search(FilterCategory::Overlays).unwrap();
        assert_eq!(found.name, "Snow Effect");
        assert_eq!(state.gallery(FilterCategory::Overlays).selected, Some(1));
        assert!(!state.gallery(FilterCategory::Overlays).search_miss);
    }

    #[test]
    fn test_search_miss_keeps_selection() {
        let mut state = AppState::new();
        state.select_filter(FilterCategory::Overlays, 3);
        state.gallery_mut(FilterCategory::Overlays).search_query = "sunshine".to_string();
        assert!(state.apply_search(FilterCategory::Overlays).is_none());
        assert!(state.gallery(FilterCategory::Overlays).search_miss);
        assert_eq!(state.gallery(FilterCategory::Overlays).selected, Some(3));
    }

    // ─── Analysis Tests ──────────────────────────────────────

    #[test]
    fn test_navigate_to_insights_with_empty_history() {
        let mut state = AppState::new();
        assert!(state.navigate(Page::Insights).is_none());
        assert_eq!(state.analysis, AnalysisView::NoHistory);
    }

    #[test]
    fn test_navigate_to_insights_starts_analysis() {
        let mut state = state_with_history();
        let request = state.navigate(Page::Insights).unwrap();
        assert_eq!(request.history, state.history);
        assert_eq!(
            state.analysis,
            AnalysisView::Running {
                request_id: request.id,
                history: state.history.clone(),
            }
        );
        assert!(state.is_busy());

        // Staying on the page does not start another one
        assert!(state.navigate(Page::Insights).is_none());
    }

    #[test]
    fn test_navigate_elsewhere_does_not_analyze() {
        let mut state = state_with_history();
        assert!(state.navigate(Page::Chat).is_none());
        assert_eq!(state.analysis, AnalysisView::Idle);
    }

    #[test]
    fn test_at_most_one_analysis_in_flight() {
        let mut state = state_with_history();
        assert!(state.begin_analysis().is_some());
        assert!(state.begin_analysis().is_none());
    }

    #[test]
    fn test_analysis_complete_applies_report() {
        let mut state = state_with_history();
        let request = state.begin_analysis().unwrap();
        state.process_events(vec![AppEvent::AnalysisComplete {
            request_id: request.id,
            report: report(),
            turns: 1,
        }]);

        match &state.analysis {
            AnalysisView::Ready { report: r, turns, .. } => {
                assert_eq!(r, &report());
                assert_eq!(*turns, 1);
            }
            other => panic!("Expected Ready, got {other:?}"),
        }
        assert!(!state.is_busy());
        // A finished analysis can be re-run
        assert!(state.begin_analysis().is_some());
    }

    #[test]
    fn test_analysis_failure_is_shown() {
        let mut state = state_with_history();
        let request = state.begin_analysis().unwrap();
        let error = AnalysisError::MalformedOutput {
            reason: "expected value".to_string(),
            raw: "not json at all".to_string(),
        };
        state.process_events(vec![AppEvent::AnalysisFailed {
            request_id: request.id,
            error: error.clone(),
        }]);
        assert_eq!(state.analysis, AnalysisView::Failed(error));
        assert!(state.status_text.starts_with("Analysis failed"));
    }

    #[test]
    fn test_stale_analysis_result_discarded() {
        let mut state = state_with_history();
        let request = state.begin_analysis().unwrap();
        state.process_events(vec![AppEvent::AnalysisComplete {
            request_id: Uuid::new_v4(),
            report: report(),
            turns: 1,
        }]);
        assert!(matches!(
            state.analysis,
            AnalysisView::Running { request_id, .. } if request_id == request.id
        ));
    }

    #[test]
    fn test_changed_history_supersedes_running_analysis() {
        let mut state = state_with_history();
        let first = state.navigate(Page::Insights).unwrap();

        // Chat while the first analysis is still in flight
        state.navigate(Page::Chat);
        let ticket = state.submit_chat("The app crashed").unwrap();
        state.process_events(vec![AppEvent::ChatReply {
            request_id: ticket.id,
            pair: MessagePair::new("The app crashed", "Please update the app."),
        }]);

        let second = state.navigate(Page::Insights).unwrap();
        assert_ne!(second.id, first.id);
        assert_eq!(second.history.len(), 2);

        // The superseded result is dropped
        state.process_events(vec![AppEvent::AnalysisComplete {
            request_id: first.id,
            report: report(),
            turns: 1,
        }]);
        assert!(matches!(
            state.analysis,
            AnalysisView::Running { request_id, .. } if request_id == second.id
        ));

        state.process_events(vec![AppEvent::AnalysisComplete {
            request_id: second.id,
            report: report(),
            turns: 2,
        }]);
        match &state.analysis {
            AnalysisView::Ready { turns, history, .. } => {
                assert_eq!(*turns, 2);
                assert_eq!(history.len(), 2);
            }
            other => panic!("Expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_report_keeps_analyzed_history() {
        let mut state = state_with_history();
        let request = state.begin_analysis().unwrap();
        state
            .history
            .push(MessagePair::new("Still broken", "Sorry to hear that."));

        state.process_events(vec![AppEvent::AnalysisComplete {
            request_id: request.id,
            report: report(),
            turns: request.history.len(),
        }]);
        match &state.analysis {
            AnalysisView::Ready { turns, history, .. } => {
                assert_eq!(*turns, 1);
                assert_eq!(history, &request.history);
                assert_eq!(history.len(), 1);
            }
            other => panic!("Expected Ready, got {other:?}"),
        }
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_clear_history_invalidates_running_analysis() {
        let mut state = state_with_history();
        let request = state.navigate(Page::Insights).unwrap();
        state.clear_history();
        assert_eq!(state.analysis, AnalysisView::NoHistory);

        state.process_events(vec![AppEvent::AnalysisComplete {
            request_id: request.id,
            report: report(),
            turns: 1,
        }]);
        assert_eq!(state.analysis, AnalysisView::NoHistory);
    }

    // ─── Chat Tests ──────────────────────────────────────────

    #[test]
    fn test_submit_chat_blank_ignored() {
        let mut state = AppState::new();
        assert!(state.submit_chat("   ").is_none());
        assert!(state.chat_pending.is_none());
    }

    #[test]
    fn test_submit_chat_and_reply() {
        let mut state = state_with_history();
        let ticket = state.submit_chat("  The app crashed  ").unwrap();
        assert_eq!(ticket.input, "The app crashed");
        assert_eq!(ticket.history.len(), 1);
        assert!(state.is_busy());
        // one message at a time
        assert!(state.submit_chat("again").is_none());

        state.process_events(vec![AppEvent::ChatReply {
            request_id: ticket.id,
            pair: MessagePair::new("The app crashed", "Please update the app."),
        }]);
        assert_eq!(state.history.len(), 2);
        assert!(state.chat_pending.is_none());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_chat_failure_restores_input() {
        let mut state = AppState::new();
        let ticket = state.submit_chat("hello").unwrap();
        state.process_events(vec![AppEvent::ChatFailed {
            request_id: ticket.id,
            message: AppError::Timeout(60_000).to_string(),
        }]);
        assert!(state.history.is_empty());
        assert!(state.chat_pending.is_none());
        assert_eq!(state.chat_input, "hello");
        assert!(state.chat_error.is_some());
    }

    #[test]
    fn test_reply_after_clear_discarded() {
        let mut state = AppState::new();
        let ticket = state.submit_chat("hello").unwrap();
        state.clear_history();
        state.process_events(vec![AppEvent::ChatReply {
            request_id: ticket.id,
            pair: MessagePair::new("hello", "hi"),
        }]);
        assert!(state.history.is_empty());
    }

    // ─── Chart Tests ─────────────────────────────────────────

    #[test]
    fn test_chart_points_span_plot() {
        let plot = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 50.0));
        let points = chart_points(&[-1.0, 0.0, 1.0], plot);
        assert_eq!(points, vec![
            Pos2::new(0.0, 50.0),
            Pos2::new(50.0, 25.0),
            Pos2::new(100.0, 0.0),
        ]);
    }

    #[test]
    fn test_chart_single_point_centered() {
        let plot = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 50.0));
        assert_eq!(chart_points(&[0.0], plot), vec![Pos2::new(50.0, 25.0)]);
        assert!(chart_points(&[], plot).is_empty());
    }
}
