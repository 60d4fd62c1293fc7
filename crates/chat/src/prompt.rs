//! Prompt construction — the context-assembly policy.
//!
//! Builds the ordered message sequence for the completion service from
//! three inputs: the question, the retrieved documents, and the session
//! memory window for the active topic.
//!
//! The policy is deterministic: identical inputs always produce the
//! identical sequence. Two system-instruction variants exist:
//!
//! - **Grounded** — at least one document was retrieved. The instruction
//!   points the model at the HANU documents (and at prior CONTEXT first,
//!   when the session holds recent answers), and a trailing `assistant`
//!   message carries that material.
//! - **Plain** — nothing was retrieved. The instruction only sets the
//!   tone and response language; no `assistant` message is added.

use hanuchat_core::message::{PromptMessage, ResponsePayload};

/// Build the message sequence for one question.
///
/// The result is `[system, user]` or `[system, user, assistant]` — the
/// `assistant` grounding message is present exactly when `documents` is
/// non-empty.
pub fn build_prompt(
    question: &str,
    documents: &[String],
    recent: &[ResponsePayload],
) -> Vec<PromptMessage> {
    let context_text = concat_documents(documents);

    let mut messages = Vec::with_capacity(3);

    if context_text.is_empty() {
        messages.push(PromptMessage::system(system_instruction_plain()));
        messages.push(PromptMessage::user(question));
    } else {
        messages.push(PromptMessage::system(system_instruction_grounded(
            !recent.is_empty(),
        )));
        messages.push(PromptMessage::user(question));
        messages.push(PromptMessage::assistant(grounding_content(
            &context_text,
            recent,
        )));
    }

    messages
}

/// Concatenate document excerpts in service order, one per line.
fn concat_documents(documents: &[String]) -> String {
    let mut out = String::new();
    for document in documents {
        out.push_str(document);
        out.push('\n');
    }
    out
}

/// System instruction used when documents were retrieved.
///
/// When the session holds recent answers, the model is told to consult
/// that CONTEXT before the documents.
fn system_instruction_grounded(has_recent: bool) -> String {
    let grounding = if has_recent {
        "You must refer to CONTEXT first, then HANU documents, filter all relevant content"
    } else {
        "You must refer to HANU documents"
    };

    format!(
        "You are a friendly chatbot.\n\
         {grounding} to answer the questions.\n\
         You respond in a concise, technically credible tone. \
         You use the language of the question given to respond.\n\
         If you can not find relevant information in HANU documents, \
         say apology for not being able to answer.\n\
         You automatically make currency exchange based on the language asked, \
         if not provided specific currency."
    )
}

/// System instruction used when no documents were retrieved.
fn system_instruction_plain() -> &'static str {
    "You are a friendly chatbot.\n\
     You respond in a concise, technically credible tone.\n\
     You use the language used in the question to respond."
}

/// Content of the trailing `assistant` grounding message.
fn grounding_content(context_text: &str, recent: &[ResponsePayload]) -> String {
    let mut content = String::new();

    if !recent.is_empty() {
        let listed: Vec<String> = recent.iter().map(ResponsePayload::render).collect();
        content.push_str("CONTEXT: ");
        content.push_str(&listed.join("; "));
        content.push('\n');
    }

    content.push_str("HANU documents: ");
    content.push_str(context_text);
    content
}
