//! HTTP client for the language-model completion service.
//!
//! The service accepts the assembled role-tagged message sequence and
//! answers in one of two shapes:
//!
//! - Request: `POST` with JSON body `{ "messages": [{role, content}, ...] }`
//! - Response: JSON body `{ "message": <any> }` when the declared content
//!   type is JSON, otherwise a raw text body.
//!
//! Both shapes are normalized to a [`ResponsePayload`] before anything
//! downstream touches them. Exactly one invocation per user question;
//! no retry, no streaming.

use async_trait::async_trait;
use hanuchat_core::completion::CompletionService;
use hanuchat_core::error::CompletionError;
use hanuchat_core::message::{PromptMessage, ResponsePayload};
use serde::Deserialize;
use tracing::{debug, warn};

/// HTTP-backed completion service client.
pub struct HttpCompletionService {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpCompletionService {
    /// Create a new client for the given service endpoint.
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
impl CompletionService for HttpCompletionService {
    fn name(&self) -> &str {
        "http"
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
    ) -> Result<ResponsePayload, CompletionError> {
        debug!(endpoint = %self.endpoint, messages = messages.len(), "Sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "messages": messages }))
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Completion service returned error");
            return Err(CompletionError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        normalize_payload(&content_type, body)
    }
}

/// Normalize a successful response body according to its declared
/// content type: JSON bodies yield their `message` field, anything else
/// passes through as raw text.
fn normalize_payload(
    content_type: &str,
    body: String,
) -> Result<ResponsePayload, CompletionError> {
    if content_type.contains("application/json") {
        let api_response: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;
        Ok(ResponsePayload::Json(api_response.message))
    } else {
        Ok(ResponsePayload::Text(body))
    }
}

// --- Completion API types (internal) ---

#[derive(Debug, Deserialize)]
struct ApiResponse {
    message: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_trimmed() {
        let service = HttpCompletionService::new("http://localhost:3000/api/chat/");
        assert_eq!(service.endpoint, "http://localhost:3000/api/chat");
        assert_eq!(service.name(), "http");
    }

    #[test]
    fn json_body_yields_message_field() {
        let payload = normalize_payload(
            "application/json; charset=utf-8",
            r#"{"message": "Tuition is due in March."}"#.into(),
        )
        .unwrap();
        assert_eq!(
            payload,
            ResponsePayload::Json(serde_json::json!("Tuition is due in March."))
        );
    }

    #[test]
    fn structured_json_message_preserved() {
        let payload = normalize_payload(
            "application/json",
            r#"{"message": {"answer": "500 USD", "confidence": 0.9}}"#.into(),
        )
        .unwrap();
        match payload {
            ResponsePayload::Json(value) => {
                assert_eq!(value["answer"], "500 USD");
            }
            other => panic!("expected JSON payload, got {other:?}"),
        }
    }

    #[test]
    fn text_body_passes_through() {
        let payload =
            normalize_payload("text/plain; charset=utf-8", "a plain answer".into()).unwrap();
        assert_eq!(payload, ResponsePayload::Text("a plain answer".into()));
    }

    #[test]
    fn missing_content_type_treated_as_text() {
        let payload = normalize_payload("", "fallback body".into()).unwrap();
        assert_eq!(payload, ResponsePayload::Text("fallback body".into()));
    }

    #[test]
    fn json_without_message_field_is_invalid() {
        let err = normalize_payload("application/json", r#"{"answer": "hi"}"#.into()).unwrap_err();
        assert!(matches!(err, CompletionError::InvalidResponse(_)));
    }

    #[test]
    fn malformed_json_is_invalid() {
        let err = normalize_payload("application/json", "not json at all".into()).unwrap_err();
        assert!(matches!(err, CompletionError::InvalidResponse(_)));
    }

    #[test]
    fn request_body_shape() {
        let messages = vec![
            PromptMessage::system("Be concise."),
            PromptMessage::user("How to pay tuition fees?"),
        ];
        let body = serde_json::json!({ "messages": messages });
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "How to pay tuition fees?");
    }
}
