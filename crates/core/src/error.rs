//! Error types for the hanuchat domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each external collaborator has its own error variant.

use thiserror::Error;

/// The top-level error type for all hanuchat operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Retrieval errors ---
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    // --- Completion errors ---
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    // --- Input validation ---
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Collaborator errors ---

/// The document retrieval service failed.
///
/// The pipeline recovers from these locally: a failed retrieval is
/// treated as "no relevant documents" and the turn continues ungrounded.
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    #[error("Retrieval request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid retrieval response: {0}")]
    InvalidResponse(String),
}

/// The completion service failed.
///
/// Not recovered: the turn produces no bot reply. The conversation
/// itself stays usable.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    #[error("Completion request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),
}

/// The user input was rejected before any external call.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Question is empty")]
    EmptyQuestion,
}
