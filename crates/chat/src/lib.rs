//! The conversation pipeline — the heart of hanuchat.
//!
//! Each user question runs one fixed sequence:
//!
//! 1. **Validate** the question (non-empty after trimming)
//! 2. **Retrieve** relevant domain documents (degrades to none on failure)
//! 3. **Construct** the role-tagged prompt, folding in session memory
//! 4. **Complete** via the language-model service
//! 5. **Record** the answer into session memory and the transcript
//!
//! The pipeline never crashes the conversation: retrieval failures
//! degrade to an ungrounded prompt, completion failures leave the turn
//! without a bot reply.

pub mod prompt;
pub mod session;

pub use prompt::build_prompt;
pub use session::ChatSession;

#[cfg(test)]
pub mod test_helpers;
