use crate::api::ApiError;
use crate::models::{ApiRequest, HistoryEntry, QuizId, QuizRecord, RequestTag};
use crate::tabs::RequestCounter;
use crate::ui::modal::is_close_key;
use crossterm::event::{KeyCode, KeyEvent};

pub const HISTORY_FALLBACK_MESSAGE: &str = "Failed to load quiz history.";
pub const DETAIL_FALLBACK_MESSAGE: &str = "Failed to load quiz details.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<HistoryEntry>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Closed,
    Loading { id: QuizId, tag: RequestTag },
    Loaded(QuizRecord),
}

#[derive(Debug)]
pub struct HistoryTab {
    requests: RequestCounter,
    latest_list: Option<RequestTag>,
    pub list: ListState,
    pub error: Option<String>,
    pub selected: usize,
    pub detail: DetailState,
    pub detail_scroll_y: u16,
    pub detail_max_scroll: u16,
}

impl HistoryTab {
    pub fn new(instance: u64) -> Self {
        Self {
            requests: RequestCounter::new(instance),
            latest_list: None,
            list: ListState::Loading,
            error: None,
            selected: 0,
            detail: DetailState::Closed,
            detail_scroll_y: 0,
            detail_max_scroll: 0,
        }
    }

    pub fn instance(&self) -> u64 {
        self.requests.instance()
    }

    /// Start (or restart) loading the list. Called once on mount.
    pub fn load(&mut self) -> ApiRequest {
        let tag = self.requests.issue();
        self.latest_list = Some(tag);
        self.list = ListState::Loading;
        self.error = None;
        ApiRequest::ListHistory { tag }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        match &self.list {
            ListState::Loaded(entries) => entries,
            _ => &[],
        }
    }

    pub fn is_modal_open(&self) -> bool {
        !matches!(self.detail, DetailState::Closed)
    }

    pub fn selected_entry(&self) -> Option<&HistoryEntry> {
        self.entries().get(self.selected)
    }

    /// Open the modal for the selected row and fetch its quiz.
    pub fn open_details(&mut self) -> Option<ApiRequest> {
        let id = self.selected_entry()?.id;
        let tag = self.requests.issue();
        self.detail = DetailState::Loading { id, tag };
        self.detail_scroll_y = 0;
        self.error = None;
        log::info!("Opening details for quiz {}", id);
        Some(ApiRequest::FetchQuiz { tag, id })
    }

    /// Drop the detail; a fetch still in flight will be ignored.
    pub fn close_details(&mut self) {
        self.detail = DetailState::Closed;
        self.detail_scroll_y = 0;
        self.detail_max_scroll = 0;
    }

    pub fn apply_history(&mut self, tag: RequestTag, result: Result<Vec<HistoryEntry>, ApiError>) {
        if self.latest_list != Some(tag) {
            log::debug!("Ignoring superseded history response (seq {})", tag.seq);
            return;
        }

        match result {
            Ok(entries) => {
                self.selected = self.selected.min(entries.len().saturating_sub(1));
                self.list = ListState::Loaded(entries);
            }
            Err(e) => {
                self.list = ListState::Failed;
                self.error = Some(e.user_message(HISTORY_FALLBACK_MESSAGE));
            }
        }
    }

    pub fn apply_detail(
        &mut self,
        tag: RequestTag,
        id: QuizId,
        result: Result<QuizRecord, ApiError>,
    ) {
        let pending = matches!(
            self.detail,
            DetailState::Loading { tag: pending, .. } if pending == tag
        );
        if !pending {
            log::debug!("Ignoring detail response for quiz {} (modal closed or reopened)", id);
            return;
        }

        match result {
            Ok(record) => self.detail = DetailState::Loaded(record),
            Err(e) => {
                self.close_details();
                self.error = Some(e.user_message(DETAIL_FALLBACK_MESSAGE));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ApiRequest> {
        if self.is_modal_open() {
            if is_close_key(&key) {
                self.close_details();
                return None;
            }
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.detail_scroll_y = self.detail_scroll_y.saturating_sub(1)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.detail_scroll_y = (self.detail_scroll_y + 1).min(self.detail_max_scroll)
                }
                KeyCode::PageUp => self.detail_scroll_y = self.detail_scroll_y.saturating_sub(10),
                KeyCode::PageDown => {
                    self.detail_scroll_y = self
                        .detail_scroll_y
                        .saturating_add(10)
                        .min(self.detail_max_scroll)
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < self.entries().len().saturating_sub(1) {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char('d') => self.open_details(),
            KeyCode::Char('r') => Some(self.load()),
            _ => None,
        }
    }
}
