use crate::api::ApiError;
use serde::{Deserialize, Serialize};

pub type QuizId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuizId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_generated: Option<String>,
    pub title: String,
    pub summary: String,
    pub key_entities: KeyEntities,
    pub quiz: Vec<QuizQuestion>,
    pub related_topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyEntities {
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub difficulty: Difficulty,
    pub explanation: String,
}

impl QuizQuestion {
    /// Position of the option equal to `answer`, if any.
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option == &self.answer)
    }
}

/// Backend difficulty labels are free-form strings; anything outside the
/// three known levels lands in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unknown => "unknown",
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: QuizId,
    pub title: String,
    pub url: String,
    pub date_generated: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

/// Identifies the tab instance and the request within it that a response
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    pub instance: u64,
    pub seq: u64,
}

#[derive(Debug)]
pub enum ApiRequest {
    GenerateQuiz { tag: RequestTag, url: String },
    ListHistory { tag: RequestTag },
    FetchQuiz { tag: RequestTag, id: QuizId },
    HealthCheck,
}

#[derive(Debug)]
pub enum ApiResponse {
    QuizGenerated {
        tag: RequestTag,
        result: Result<QuizRecord, ApiError>,
    },
    HistoryLoaded {
        tag: RequestTag,
        result: Result<Vec<HistoryEntry>, ApiError>,
    },
    QuizFetched {
        tag: RequestTag,
        id: QuizId,
        result: Result<QuizRecord, ApiError>,
    },
    Health(Result<HealthStatus, ApiError>),
}

impl ApiResponse {
    pub fn tag(&self) -> Option<RequestTag> {
        match self {
            ApiResponse::QuizGenerated { tag, .. }
            | ApiResponse::HistoryLoaded { tag, .. }
            | ApiResponse::QuizFetched { tag, .. } => Some(*tag),
            ApiResponse::Health(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AppTab {
    #[default]
    Generate,
    History,
}

impl AppTab {
    pub const ALL: [AppTab; 2] = [AppTab::Generate, AppTab::History];

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Generate => "Generate Quiz",
            AppTab::History => "Past Quizzes",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AppTab::Generate => 0,
            AppTab::History => 1,
        }
    }

    pub fn next(&self) -> AppTab {
        match self {
            AppTab::Generate => AppTab::History,
            AppTab::History => AppTab::Generate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Unreachable(String),
}
