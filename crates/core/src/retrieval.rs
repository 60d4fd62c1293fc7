//! DocumentRetriever trait — the abstraction over the document retrieval
//! service.
//!
//! A retriever takes a user question and returns the domain-document
//! excerpts relevant to it, in the order the service ranked them.
//!
//! Implementations: HTTP retrieval client, mocks for testing.

use crate::error::RetrievalError;
use async_trait::async_trait;

/// The core DocumentRetriever trait.
///
/// One retrieval attempt per question; callers decide how to degrade
/// when the service fails.
#[async_trait]
pub trait DocumentRetriever: Send + Sync {
    /// A human-readable name for this retriever (e.g., "http", "mock").
    fn name(&self) -> &str;

    /// Retrieve relevant document excerpts for a question.
    ///
    /// Returns an empty vector when the service finds nothing relevant.
    async fn retrieve(
        &self,
        question: &str,
    ) -> std::result::Result<Vec<String>, RetrievalError>;
}
