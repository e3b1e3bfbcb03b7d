use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Backend unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail provided"))]
    Http { status: u16, detail: Option<String> },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("API worker is not running")]
    WorkerUnavailable,
}

impl ApiError {
    /// Message suitable for the error region of a tab. Only the backend's
    /// `detail` is shown verbatim; everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}
