//! # hanuchat Core
//!
//! Domain types, traits, and error definitions for the hanuchat assistant.
//! This crate has **zero framework dependencies** — it defines the domain model
//! that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator is defined as a trait here: the document
//! retrieval service, the completion service, and the session memory store.
//! Implementations live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod completion;
pub mod error;
pub mod message;
pub mod retrieval;
pub mod session;

// Re-export key types at crate root for ergonomics
pub use completion::CompletionService;
pub use error::{CompletionError, Error, Result, RetrievalError, ValidationError};
pub use message::{ChatLogEntry, EntryKind, PromptMessage, ResponsePayload, Role};
pub use retrieval::DocumentRetriever;
pub use session::{CONTEXT_WINDOW, SessionMemoryStore};
