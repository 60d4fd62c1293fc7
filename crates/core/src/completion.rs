//! CompletionService trait — the abstraction over the language-model
//! completion backend.
//!
//! A completion service takes the assembled role-tagged message sequence
//! and returns a single response payload. No streaming, no retries:
//! exactly one invocation per user question.
//!
//! Implementations: HTTP completion client, mocks for testing.

use crate::error::CompletionError;
use crate::message::{PromptMessage, ResponsePayload};
use async_trait::async_trait;

/// The core CompletionService trait.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// A human-readable name for this service (e.g., "http", "mock").
    fn name(&self) -> &str;

    /// Submit a prompt sequence and await the single response payload.
    ///
    /// The payload is already normalized: JSON responses arrive as
    /// [`ResponsePayload::Json`], anything else as [`ResponsePayload::Text`].
    async fn complete(
        &self,
        messages: &[PromptMessage],
    ) -> std::result::Result<ResponsePayload, CompletionError>;
}
