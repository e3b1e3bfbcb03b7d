use crate::api::{ApiError, QuizBackend};
use crate::models::{ApiRequest, ApiResponse};
use crossbeam_channel::{Receiver, Sender};
use std::io;
use std::sync::Arc;
use std::thread;

/// Runs every request as its own task on a private runtime. Requests are
/// never queued behind each other and never cancelled; a response whose
/// receiver is gone is dropped. The runtime is built before the thread starts
/// so a failure surfaces to the caller.
pub fn spawn_api_worker(
    backend: Arc<dyn QuizBackend>,
    api_tx: Sender<ApiResponse>,
    api_rx: Receiver<ApiRequest>,
) -> io::Result<thread::JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("wiki-quiz::api_worker".to_string())
        .spawn(move || {
            loop {
                match api_rx.recv() {
                    Ok(request) => {
                        log::debug!("Worker received {:?}", request);
                        let backend = backend.clone();
                        let api_tx = api_tx.clone();
                        runtime.spawn(async move {
                            let response = execute(backend.as_ref(), request).await;
                            if api_tx.send(response).is_err() {
                                log::debug!("Response channel closed, dropping response");
                            }
                        });
                    }
                    Err(_) => {
                        // Channel disconnected, exit worker
                        log::info!("Worker channel disconnected, exiting");
                        break;
                    }
                }
            }

            runtime.shutdown_background();
        })
}

/// The response a request gets when it never reached the worker.
pub fn undelivered(request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::GenerateQuiz { tag, .. } => ApiResponse::QuizGenerated {
            tag,
            result: Err(ApiError::WorkerUnavailable),
        },
        ApiRequest::ListHistory { tag } => ApiResponse::HistoryLoaded {
            tag,
            result: Err(ApiError::WorkerUnavailable),
        },
        ApiRequest::FetchQuiz { tag, id } => ApiResponse::QuizFetched {
            tag,
            id,
            result: Err(ApiError::WorkerUnavailable),
        },
        ApiRequest::HealthCheck => ApiResponse::Health(Err(ApiError::WorkerUnavailable)),
    }
}

pub async fn execute(backend: &dyn QuizBackend, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::GenerateQuiz { tag, url } => {
            let result = backend.generate_quiz(&url).await;
            if let Err(e) = &result {
                log::warn!("Quiz generation failed for {}: {}", url, e);
            }
            ApiResponse::QuizGenerated { tag, result }
        }
        ApiRequest::ListHistory { tag } => {
            let result = backend.list_history().await;
            match &result {
                Ok(entries) => log::info!("Retrieved {} history entries", entries.len()),
                Err(e) => log::warn!("History request failed: {}", e),
            }
            ApiResponse::HistoryLoaded { tag, result }
        }
        ApiRequest::FetchQuiz { tag, id } => {
            let result = backend.fetch_quiz(id).await;
            if let Err(e) = &result {
                log::warn!("Fetching quiz {} failed: {}", id, e);
            }
            ApiResponse::QuizFetched { tag, id, result }
        }
        ApiRequest::HealthCheck => {
            let result = backend.health().await;
            if let Err(e) = &result {
                log::warn!("Health check failed: {}", e);
            }
            ApiResponse::Health(result)
        }
    }
}
