//! Shared test helpers for pipeline tests.

use async_trait::async_trait;
use hanuchat_core::completion::CompletionService;
use hanuchat_core::error::{CompletionError, RetrievalError};
use hanuchat_core::message::{PromptMessage, ResponsePayload};
use hanuchat_core::retrieval::DocumentRetriever;
use std::sync::Mutex;

/// A stub retriever with a fixed outcome and a call counter.
pub struct StubRetriever {
    outcome: Result<Vec<String>, RetrievalError>,
    calls: Mutex<usize>,
}

impl StubRetriever {
    /// Always return the given documents.
    pub fn with_docs(documents: &[&str]) -> Self {
        Self {
            outcome: Ok(documents.iter().map(|d| d.to_string()).collect()),
            calls: Mutex::new(0),
        }
    }

    /// Always return no documents.
    pub fn empty() -> Self {
        Self::with_docs(&[])
    }

    /// Always fail with the given status code.
    pub fn failing(status_code: u16) -> Self {
        Self {
            outcome: Err(RetrievalError::ApiError {
                status_code,
                message: "mock retrieval failure".into(),
            }),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl DocumentRetriever for StubRetriever {
    fn name(&self) -> &str {
        "stub"
    }

    async fn retrieve(&self, _question: &str) -> Result<Vec<String>, RetrievalError> {
        *self.calls.lock().unwrap() += 1;
        self.outcome.clone()
    }
}

/// A mock completion service that returns a sequence of scripted
/// payloads and records every request it receives.
///
/// Each call to `complete` consumes the next scripted entry. Panics if
/// more calls are made than entries provided.
pub struct SequentialMockCompletion {
    script: Mutex<Vec<Result<ResponsePayload, CompletionError>>>,
    requests: Mutex<Vec<Vec<PromptMessage>>>,
    call_count: Mutex<usize>,
}

impl SequentialMockCompletion {
    pub fn new(script: Vec<Result<ResponsePayload, CompletionError>>) -> Self {
        Self {
            script: Mutex::new(script),
            requests: Mutex::new(Vec::new()),
            call_count: Mutex::new(0),
        }
    }

    /// A service that answers once with a text payload.
    pub fn single_text(text: &str) -> Self {
        Self::new(vec![Ok(ResponsePayload::Text(text.into()))])
    }

    /// A service that answers with the given texts, in order.
    pub fn sequence(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| Ok(ResponsePayload::Text(t.to_string())))
                .collect(),
        )
    }

    /// A service that fails once with the given status code.
    pub fn failing(status_code: u16) -> Self {
        Self::new(vec![Err(CompletionError::ApiError {
            status_code,
            message: "mock completion failure".into(),
        })])
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<Vec<PromptMessage>> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<Vec<PromptMessage>> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionService for SequentialMockCompletion {
    fn name(&self) -> &str {
        "sequential_mock"
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
    ) -> Result<ResponsePayload, CompletionError> {
        self.requests.lock().unwrap().push(messages.to_vec());

        let mut count = self.call_count.lock().unwrap();
        let script = self.script.lock().unwrap();

        if *count >= script.len() {
            panic!(
                "SequentialMockCompletion: no more responses (call #{}, have {})",
                *count,
                script.len()
            );
        }

        let response = script[*count].clone();
        *count += 1;
        response
    }
}
