pub mod api;
pub mod api_worker;
pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod tabs;
pub mod terminal;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use api::{ApiError, QuizApiClient, QuizBackend};
pub use api_worker::spawn_api_worker;
pub use app::{ActiveTab, App};
pub use config::{Cli, Config};
pub use error::AppError;
pub use models::{AppTab, HistoryEntry, QuizQuestion, QuizRecord};
pub use ui::{draw_app, render_quiz};
