//! Message and transcript domain types.
//!
//! These are the value objects that flow through the system:
//! the user asks a question → the pipeline assembles prompt messages →
//! the completion service answers → the transcript records the exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The role of a message in a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions (tone, grounding rules)
    System,
    /// The end user's question
    User,
    /// Contextual grounding injected before submission
    Assistant,
}

/// A single role-tagged message submitted to the completion service.
///
/// An outgoing request is always one `system` message followed by one
/// `user` message, with an optional trailing `assistant` message that
/// carries retrieved-document context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Who this message speaks as
    pub role: Role,

    /// The text content
    pub content: String,
}

impl PromptMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A completion response payload, in one of the two shapes the service
/// is known to produce.
///
/// The service answers either with a JSON body (whose `message` field is
/// kept as-is) or with a raw text body. Downstream code handles both
/// exhaustively instead of passing around an untyped value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ResponsePayload {
    /// The `message` field of a JSON response body.
    Json(serde_json::Value),
    /// A raw text response body.
    Text(String),
}

impl ResponsePayload {
    /// Render the payload as display text.
    ///
    /// JSON string payloads render without surrounding quotes; other JSON
    /// values render in their compact serialized form.
    pub fn render(&self) -> String {
        match self {
            Self::Json(serde_json::Value::String(s)) => s.clone(),
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Bot,
    User,
}

/// A single entry in the visible conversation transcript.
///
/// The transcript is append-only; it is reset only by an explicit clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatLogEntry {
    /// Unique entry ID
    pub id: String,

    /// Who produced this entry
    pub kind: EntryKind,

    /// The entry content
    pub message: ResponsePayload,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl ChatLogEntry {
    /// Create a user transcript entry from the question text.
    pub fn user(question: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: EntryKind::User,
            message: ResponsePayload::Text(question.into()),
            timestamp: Utc::now(),
        }
    }

    /// Create a bot transcript entry from a completion payload.
    pub fn bot(payload: ResponsePayload) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: EntryKind::Bot,
            message: payload,
            timestamp: Utc::now(),
        }
    }
}
