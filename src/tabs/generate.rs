use crate::api::ApiError;
use crate::models::{ApiRequest, QuizRecord, RequestTag};
use crate::tabs::RequestCounter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub const EMPTY_URL_MESSAGE: &str = "Please enter a Wikipedia URL.";
pub const GENERATE_FALLBACK_MESSAGE: &str =
    "Failed to generate quiz. Is the backend server running?";

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateState {
    Idle,
    Loading { started: Instant },
    Success(QuizRecord),
    Error(String),
}

#[derive(Debug)]
pub struct GenerateTab {
    requests: RequestCounter,
    latest: Option<RequestTag>,
    pub input: String,
    /// Char index into `input`.
    pub cursor: usize,
    pub state: GenerateState,
    pub scroll_y: u16,
    pub max_scroll: u16,
}

impl GenerateTab {
    pub fn new(instance: u64) -> Self {
        Self {
            requests: RequestCounter::new(instance),
            latest: None,
            input: String::new(),
            cursor: 0,
            state: GenerateState::Idle,
            scroll_y: 0,
            max_scroll: 0,
        }
    }

    pub fn instance(&self) -> u64 {
        self.requests.instance()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GenerateState::Loading { .. })
    }

    pub fn result(&self) -> Option<&QuizRecord> {
        match &self.state {
            GenerateState::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            GenerateState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Validate the input and, if it is not blank, start a request for it.
    /// Any earlier result or error is discarded; an earlier request still in
    /// flight keeps running but its response will no longer be applied.
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if self.input.trim().is_empty() {
            log::debug!("Rejected blank URL submission");
            self.state = GenerateState::Error(EMPTY_URL_MESSAGE.to_string());
            return None;
        }

        let tag = self.requests.issue();
        self.latest = Some(tag);
        self.state = GenerateState::Loading {
            started: Instant::now(),
        };
        self.scroll_y = 0;
        log::info!("Submitting {} (seq {})", self.input, tag.seq);

        Some(ApiRequest::GenerateQuiz {
            tag,
            url: self.input.clone(),
        })
    }

    pub fn apply_response(&mut self, tag: RequestTag, result: Result<QuizRecord, ApiError>) {
        if self.latest != Some(tag) {
            log::debug!("Ignoring superseded generate response (seq {})", tag.seq);
            return;
        }

        self.state = match result {
            Ok(record) => {
                log::info!(
                    "Quiz generated: {} ({} questions)",
                    record.title,
                    record.quiz.len()
                );
                GenerateState::Success(record)
            }
            Err(e) => GenerateState::Error(e.user_message(GENERATE_FALLBACK_MESSAGE)),
        };
        self.scroll_y = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ApiRequest> {
        match key.code {
            KeyCode::Enter => return self.submit(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                self.cursor = 0;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = self.byte_index(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_index(self.cursor - 1);
                    self.input.remove(at);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.chars().count(),
            KeyCode::Up => self.scroll_y = self.scroll_y.saturating_sub(1),
            KeyCode::Down => self.scroll_y = (self.scroll_y + 1).min(self.max_scroll),
            KeyCode::PageUp => self.scroll_y = self.scroll_y.saturating_sub(10),
            KeyCode::PageDown => {
                self.scroll_y = self.scroll_y.saturating_add(10).min(self.max_scroll)
            }
            _ => {}
        }
        None
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
