use crate::api::ApiError;
use crate::models::{HealthStatus, HistoryEntry, QuizId, QuizRecord};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// The operations the client needs from a quiz backend.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    async fn generate_quiz(&self, url: &str) -> Result<QuizRecord, ApiError>;
    async fn list_history(&self) -> Result<Vec<HistoryEntry>, ApiError>;
    async fn fetch_quiz(&self, id: QuizId) -> Result<QuizRecord, ApiError>;
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

#[derive(Serialize)]
struct GenerateQuizRequest<'a> {
    url: &'a str,
}

pub struct QuizApiClient {
    client: Client,
    base_url: String,
}

impl QuizApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(ApiError::Transport)?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl fmt::Debug for QuizApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizApiClient")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Pull the human-readable `detail` string out of an error body.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .filter(|detail| !detail.trim().is_empty())
        .map(str::to_string)
}

#[async_trait]
impl QuizBackend for QuizApiClient {
    async fn generate_quiz(&self, url: &str) -> Result<QuizRecord, ApiError> {
        log::info!("POST /generate_quiz url={}", url);
        let response = self
            .client
            .post(self.endpoint("/generate_quiz"))
            .json(&GenerateQuizRequest { url })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        Self::read_json(response).await
    }

    async fn list_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        log::info!("GET /history");
        let response = self
            .client
            .get(self.endpoint("/history"))
            .send()
            .await
            .map_err(ApiError::Transport)?;

        Self::read_json(response).await
    }

    async fn fetch_quiz(&self, id: QuizId) -> Result<QuizRecord, ApiError> {
        log::info!("GET /quiz/{}", id);
        let response = self
            .client
            .get(self.endpoint(&format!("/quiz/{}", id)))
            .send()
            .await
            .map_err(ApiError::Transport)?;

        Self::read_json(response).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/health"))
            .send()
            .await
            .map_err(ApiError::Transport)?;

        Self::read_json(response).await
    }
}
