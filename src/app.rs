use crate::api_worker::undelivered;
use crate::models::{ApiRequest, ApiResponse, AppTab, BackendStatus};
use crate::tabs::{GenerateTab, HistoryTab};
use crossbeam_channel::{SendError, Sender};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The mounted tab. Only one exists at a time; switching replaces it.
#[derive(Debug)]
pub enum ActiveTab {
    Generate(GenerateTab),
    History(HistoryTab),
}

impl ActiveTab {
    pub fn instance(&self) -> u64 {
        match self {
            ActiveTab::Generate(tab) => tab.instance(),
            ActiveTab::History(tab) => tab.instance(),
        }
    }

    pub fn kind(&self) -> AppTab {
        match self {
            ActiveTab::Generate(_) => AppTab::Generate,
            ActiveTab::History(_) => AppTab::History,
        }
    }
}

pub struct App {
    pub active: ActiveTab,
    pub backend_status: BackendStatus,
    pub base_url: String,
    pub should_quit: bool,
    api_tx: Sender<ApiRequest>,
    next_instance: u64,
}

impl App {
    pub fn new(base_url: String, start_tab: AppTab, api_tx: Sender<ApiRequest>) -> Self {
        let mut app = Self {
            active: ActiveTab::Generate(GenerateTab::new(0)),
            backend_status: BackendStatus::Unknown,
            base_url,
            should_quit: false,
            api_tx,
            next_instance: 0,
        };
        app.send(ApiRequest::HealthCheck);
        app.mount(start_tab);
        app
    }

    pub fn selected_tab(&self) -> AppTab {
        self.active.kind()
    }

    /// Drop the current tab and mount a fresh instance of `tab`, even if it is
    /// the one already shown.
    pub fn switch_to(&mut self, tab: AppTab) {
        log::info!("Switching to {:?} tab", tab);
        self.mount(tab);
    }

    fn mount(&mut self, tab: AppTab) {
        self.next_instance += 1;
        let instance = self.next_instance;
        match tab {
            AppTab::Generate => self.active = ActiveTab::Generate(GenerateTab::new(instance)),
            AppTab::History => {
                let mut history = HistoryTab::new(instance);
                let request = history.load();
                // Mounted first so a failed send lands on this instance.
                self.active = ActiveTab::History(history);
                self.send(request);
            }
        }
    }

    fn is_modal_open(&self) -> bool {
        matches!(&self.active, ActiveTab::History(tab) if tab.is_modal_open())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                let next = self.selected_tab().next();
                self.switch_to(next);
            }
            KeyCode::Esc if !self.is_modal_open() => {
                self.should_quit = true;
            }
            _ => {
                let request = match &mut self.active {
                    ActiveTab::Generate(tab) => tab.handle_key(key),
                    ActiveTab::History(tab) => tab.handle_key(key),
                };
                if let Some(request) = request {
                    self.send(request);
                }
            }
        }
    }

    /// Hand a worker response to the tab that asked for it. Responses for an
    /// unmounted instance are dropped without touching any state.
    pub fn handle_response(&mut self, response: ApiResponse) {
        if let ApiResponse::Health(result) = response {
            self.backend_status = match result {
                Ok(health) => {
                    log::info!("Backend health: {}", health.status);
                    BackendStatus::Online
                }
                Err(e) => BackendStatus::Unreachable(e.to_string()),
            };
            return;
        }

        if let Some(tag) = response.tag()
            && tag.instance != self.active.instance()
        {
            log::debug!(
                "Dropping response for unmounted tab instance {} (active {})",
                tag.instance,
                self.active.instance()
            );
            return;
        }

        match (&mut self.active, response) {
            (ActiveTab::Generate(tab), ApiResponse::QuizGenerated { tag, result }) => {
                tab.apply_response(tag, result)
            }
            (ActiveTab::History(tab), ApiResponse::HistoryLoaded { tag, result }) => {
                tab.apply_history(tag, result)
            }
            (ActiveTab::History(tab), ApiResponse::QuizFetched { tag, id, result }) => {
                tab.apply_detail(tag, id, result)
            }
            (_, other) => log::warn!("Response does not match the active tab: {:?}", other),
        }
    }

    /// A request the worker can no longer receive fails straight back into
    /// the tab that issued it.
    fn send(&mut self, request: ApiRequest) {
        if let Err(SendError(request)) = self.api_tx.send(request) {
            log::error!("API worker is gone, failing {:?}", request);
            self.handle_response(undelivered(request));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api_worker::test_support::sample_record;
    use crate::models::{HealthStatus, HistoryEntry};
    use crate::tabs::generate::GENERATE_FALLBACK_MESSAGE;
    use crate::tabs::history::HISTORY_FALLBACK_MESSAGE;
    use crate::tabs::{DetailState, GenerateState, ListState};
    use crossbeam_channel::{unbounded, Receiver};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(start: AppTab) -> (App, Receiver<ApiRequest>) {
        let (tx, rx) = unbounded();
        let app = App::new("http://127.0.0.1:8000".to_string(), start, tx);
        (app, rx)
    }

    fn drain(rx: &Receiver<ApiRequest>) -> Vec<ApiRequest> {
        rx.try_iter().collect()
    }

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            title: format!("Quiz {}", id),
            url: format!("https://en.wikipedia.org/wiki/{}", id),
            date_generated: "2025-01-01T12:00:00".to_string(),
        }
    }

    #[test]
    fn test_startup_probes_health() {
        let (app, rx) = app_with(AppTab::Generate);
        let requests = drain(&rx);
        assert_eq!(requests.len(), 1);
        assert!(matches!(requests[0], ApiRequest::HealthCheck));
        assert_eq!(app.selected_tab(), AppTab::Generate);
    }

    #[test]
    fn test_start_on_history_loads_list() {
        let (app, rx) = app_with(AppTab::History);
        let requests = drain(&rx);
        assert!(matches!(requests[1], ApiRequest::ListHistory { .. }));
        assert_eq!(app.selected_tab(), AppTab::History);
    }

    #[test]
    fn test_tab_switch_discards_state() {
        let (mut app, rx) = app_with(AppTab::Generate);
        for c in "https://en.wikipedia.org/wiki/Alan_Turing".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.selected_tab(), AppTab::History);
        app.handle_key(key(KeyCode::BackTab));

        let ActiveTab::Generate(tab) = &app.active else {
            panic!("expected generate tab");
        };
        assert!(tab.input.is_empty());
        assert_eq!(tab.state, GenerateState::Idle);

        let lists = drain(&rx)
            .into_iter()
            .filter(|r| matches!(r, ApiRequest::ListHistory { .. }))
            .count();
        assert_eq!(lists, 1);
    }

    #[test]
    fn test_late_response_for_unmounted_tab_is_ignored() {
        let (mut app, rx) = app_with(AppTab::Generate);
        for c in "https://a".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        let tag = drain(&rx)
            .into_iter()
            .find_map(|r| match r {
                ApiRequest::GenerateQuiz { tag, .. } => Some(tag),
                _ => None,
            })
            .unwrap();

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_response(ApiResponse::QuizGenerated {
            tag,
            result: Ok(sample_record("Stale", 2)),
        });

        let ActiveTab::Generate(tab) = &app.active else {
            panic!("expected generate tab");
        };
        assert_eq!(tab.state, GenerateState::Idle);
    }

    #[test]
    fn test_history_response_reaches_mounted_tab() {
        let (mut app, rx) = app_with(AppTab::History);
        let tag = drain(&rx)
            .into_iter()
            .find_map(|r| match r {
                ApiRequest::ListHistory { tag } => Some(tag),
                _ => None,
            })
            .unwrap();

        app.handle_response(ApiResponse::HistoryLoaded {
            tag,
            result: Ok(vec![entry(4), entry(1)]),
        });
        let ActiveTab::History(tab) = &app.active else {
            panic!("expected history tab");
        };
        assert!(matches!(&tab.list, ListState::Loaded(entries) if entries.len() == 2));
    }

    #[test]
    fn test_escape_with_modal_open_does_not_quit() {
        let (mut app, rx) = app_with(AppTab::History);
        let tag = drain(&rx)
            .into_iter()
            .find_map(|r| match r {
                ApiRequest::ListHistory { tag } => Some(tag),
                _ => None,
            })
            .unwrap();
        app.handle_response(ApiResponse::HistoryLoaded {
            tag,
            result: Ok(vec![entry(7)]),
        });

        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            drain(&rx).as_slice(),
            [ApiRequest::FetchQuiz { id: 7, .. }]
        ));

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.should_quit);
        let ActiveTab::History(tab) = &app.active else {
            panic!("expected history tab");
        };
        assert!(matches!(tab.detail, DetailState::Loading { id: 7, .. }));

        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    fn app_without_worker(start: AppTab) -> App {
        let (tx, rx) = unbounded();
        drop(rx);
        App::new("http://127.0.0.1:8000".to_string(), start, tx)
    }

    #[test]
    fn test_generate_without_worker_shows_fallback() {
        let mut app = app_without_worker(AppTab::Generate);
        assert!(matches!(app.backend_status, BackendStatus::Unreachable(_)));

        for c in "https://en.wikipedia.org/wiki/Alan_Turing".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        let ActiveTab::Generate(tab) = &app.active else {
            panic!("expected generate tab");
        };
        assert!(!tab.is_loading());
        assert_eq!(tab.error(), Some(GENERATE_FALLBACK_MESSAGE));
    }

    #[test]
    fn test_history_without_worker_shows_fallback() {
        let mut app = app_without_worker(AppTab::History);
        let ActiveTab::History(tab) = &app.active else {
            panic!("expected history tab");
        };
        assert_eq!(tab.list, ListState::Failed);
        assert_eq!(tab.error.as_deref(), Some(HISTORY_FALLBACK_MESSAGE));

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        let ActiveTab::History(tab) = &app.active else {
            panic!("expected history tab");
        };
        assert_eq!(tab.list, ListState::Failed);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut app, _rx) = app_with(AppTab::Generate);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_health_updates_status() {
        let (mut app, _rx) = app_with(AppTab::Generate);
        app.handle_response(ApiResponse::Health(Ok(HealthStatus {
            status: "healthy".to_string(),
            timestamp: None,
            service: None,
        })));
        assert_eq!(app.backend_status, BackendStatus::Online);

        app.handle_response(ApiResponse::Health(Err(ApiError::Decode("x".to_string()))));
        assert!(matches!(app.backend_status, BackendStatus::Unreachable(_)));
    }
}
