pub mod client;
pub mod error;

// Public API exports
pub use client::{QuizApiClient, QuizBackend, DEFAULT_BASE_URL};
pub use error::ApiError;
