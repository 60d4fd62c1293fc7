//! HTTP client for the document retrieval service.
//!
//! The service accepts a question and answers with the domain-document
//! excerpts it judges relevant:
//!
//! - Request: `POST` with JSON body `{ "question": "..." }`
//! - Response: JSON body `{ "relevant_docs": ["...", ...] }`; a missing
//!   or empty array means no documents.
//!
//! One attempt per question, no retries. Callers degrade to an empty
//! document set when retrieval fails.

use async_trait::async_trait;
use hanuchat_core::error::RetrievalError;
use hanuchat_core::retrieval::DocumentRetriever;
use serde::Deserialize;
use tracing::{debug, warn};

/// HTTP-backed document retriever.
pub struct HttpDocumentRetriever {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpDocumentRetriever {
    /// Create a new retriever for the given service endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl DocumentRetriever for HttpDocumentRetriever {
    fn name(&self) -> &str {
        "http"
    }

    async fn retrieve(&self, question: &str) -> Result<Vec<String>, RetrievalError> {
        debug!(endpoint = %self.endpoint, "Sending retrieval request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "question": question }))
            .send()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Retrieval service returned error");
            return Err(RetrievalError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: DocsResponse = response
            .json()
            .await
            .map_err(|e| RetrievalError::InvalidResponse(e.to_string()))?;

        debug!(count = api_response.relevant_docs.len(), "Documents retrieved");
        Ok(api_response.relevant_docs)
    }
}

// --- Retrieval API types (internal) ---

#[derive(Debug, Deserialize)]
struct DocsResponse {
    #[serde(default)]
    relevant_docs: Vec<String>,
}
