//! SessionMemoryStore trait — bounded short-term conversation memory.
//!
//! The store keeps, per topic key, a FIFO window of the most recent bot
//! response payloads. The window feeds prompt construction as short-term
//! context for follow-up questions. Storage is volatile: it lives for the
//! current process session only.

use crate::message::ResponsePayload;
use async_trait::async_trait;

/// Maximum number of prior bot responses retained per topic.
pub const CONTEXT_WINDOW: usize = 5;

/// The core SessionMemoryStore trait.
///
/// Keyed by topic (e.g., "services"); each topic owns an independent
/// window. Invariant: `read` never returns more than the window size,
/// oldest entries are evicted first.
#[async_trait]
pub trait SessionMemoryStore: Send + Sync {
    /// The store name (e.g., "in_memory").
    fn name(&self) -> &str;

    /// Read the current window for a topic, most-recent-last.
    async fn read(&self, topic: &str) -> Vec<ResponsePayload>;

    /// Append a payload to a topic's window, evicting from the front
    /// once the window is full.
    async fn append(&self, topic: &str, payload: ResponsePayload);

    /// Empty the window for a topic.
    async fn clear(&self, topic: &str);
}
