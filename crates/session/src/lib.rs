//! In-memory session store — volatile, per-topic FIFO windows.
//!
//! Holds the bounded short-term memory described by the
//! [`SessionMemoryStore`] trait. Entries live for the lifetime of the
//! process only; there is deliberately no persistent backend.

use async_trait::async_trait;
use hanuchat_core::message::ResponsePayload;
use hanuchat_core::session::{CONTEXT_WINDOW, SessionMemoryStore};
use std::collections::{HashMap, VecDeque};
use tokio::sync::RwLock;

/// An in-memory store keeping one bounded window per topic key.
pub struct InMemorySessionStore {
    windows: RwLock<HashMap<String, VecDeque<ResponsePayload>>>,
    window_size: usize,
}

impl InMemorySessionStore {
    /// Create a store with the given window size.
    pub fn new(window_size: usize) -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            window_size,
        }
    }

    /// Number of entries currently held for a topic.
    pub async fn len(&self, topic: &str) -> usize {
        self.windows
            .read()
            .await
            .get(topic)
            .map(VecDeque::len)
            .unwrap_or(0)
    }

    /// Whether a topic currently holds no entries.
    pub async fn is_empty(&self, topic: &str) -> bool {
        self.len(topic).await == 0
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(CONTEXT_WINDOW)
    }
}

#[async_trait]
impl SessionMemoryStore for InMemorySessionStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn read(&self, topic: &str) -> Vec<ResponsePayload> {
        self.windows
            .read()
            .await
            .get(topic)
            .map(|window| window.iter().cloned().collect())
            .unwrap_or_default()
    }

    async fn append(&self, topic: &str, payload: ResponsePayload) {
        let mut windows = self.windows.write().await;
        let window = windows.entry(topic.to_string()).or_default();
        window.push_back(payload);
        while window.len() > self.window_size {
            window.pop_front();
        }
    }

    async fn clear(&self, topic: &str) {
        self.windows.write().await.remove(topic);
    }
}
