//! Chat session — pipeline orchestration and transcript ownership.
//!
//! A [`ChatSession`] owns the visible transcript for one conversation
//! topic and drives the per-question pipeline against the injected
//! collaborators: document retriever, completion service, and session
//! memory store.
//!
//! Submission takes `&mut self`, so overlapping pipelines cannot be
//! launched on one session; the `busy` flag exists for presentation
//! layers that render an activity indicator while a turn is in flight.

use hanuchat_core::completion::CompletionService;
use hanuchat_core::error::{Error, Result, ValidationError};
use hanuchat_core::message::{ChatLogEntry, ResponsePayload};
use hanuchat_core::retrieval::DocumentRetriever;
use hanuchat_core::session::SessionMemoryStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::prompt::build_prompt;

/// One conversation: transcript, busy state, and the pipeline over the
/// injected collaborators.
pub struct ChatSession {
    retriever: Arc<dyn DocumentRetriever>,
    completion: Arc<dyn CompletionService>,
    store: Arc<dyn SessionMemoryStore>,
    topic: String,
    greeting: String,
    transcript: Vec<ChatLogEntry>,
    busy: bool,
}

impl ChatSession {
    /// Create a session whose transcript starts with the greeting entry.
    pub fn new(
        retriever: Arc<dyn DocumentRetriever>,
        completion: Arc<dyn CompletionService>,
        store: Arc<dyn SessionMemoryStore>,
        topic: impl Into<String>,
        greeting: impl Into<String>,
    ) -> Self {
        let greeting = greeting.into();
        Self {
            retriever,
            completion,
            store,
            topic: topic.into(),
            transcript: vec![ChatLogEntry::bot(ResponsePayload::Text(greeting.clone()))],
            greeting,
            busy: false,
        }
    }

    /// The ordered, append-only transcript.
    pub fn transcript(&self) -> &[ChatLogEntry] {
        &self.transcript
    }

    /// The topic key scoping this session's memory window.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Whether a pipeline is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit a question and run the full pipeline.
    ///
    /// The user entry is appended immediately; the bot entry only when
    /// the completion succeeds. A failed retrieval degrades to an
    /// ungrounded prompt; a failed completion leaves the turn without a
    /// bot reply and is reported to the caller.
    pub async fn submit_question(&mut self, question: &str) -> Result<()> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::EmptyQuestion.into());
        }

        self.transcript.push(ChatLogEntry::user(question));

        self.busy = true;
        let outcome = self.run_pipeline(question).await;
        self.busy = false;

        match outcome {
            Ok(payload) => {
                self.transcript.push(ChatLogEntry::bot(payload));
                Ok(())
            }
            Err(e) => {
                warn!(topic = %self.topic, error = %e, "Turn produced no reply");
                Err(e)
            }
        }
    }

    /// Reset the transcript to the greeting and clear session memory.
    ///
    /// A no-op when the transcript holds nothing beyond the greeting:
    /// clearing a fresh session must not touch the store.
    pub async fn clear_session(&mut self) {
        if self.transcript.len() <= 1 {
            return;
        }

        info!(topic = %self.topic, "Clearing session");
        self.transcript = vec![ChatLogEntry::bot(ResponsePayload::Text(
            self.greeting.clone(),
        ))];
        self.store.clear(&self.topic).await;
    }

    /// Retrieval → prompt construction → completion → memory append.
    async fn run_pipeline(&self, question: &str) -> Result<ResponsePayload> {
        let documents = match self.retriever.retrieve(question).await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(error = %e, "Document retrieval failed, continuing without grounding");
                Vec::new()
            }
        };

        debug!(documents = documents.len(), "Documents retrieved");

        // Read before append: the current answer is never part of its
        // own context.
        let recent = self.store.read(&self.topic).await;
        let messages = build_prompt(question, &documents, &recent);

        let payload = self
            .completion
            .complete(&messages)
            .await
            .map_err(Error::from)?;

        self.store.append(&self.topic, payload.clone()).await;

        info!(
            topic = %self.topic,
            documents = documents.len(),
            recent = recent.len(),
            "Turn completed"
        );

        Ok(payload)
    }
}
