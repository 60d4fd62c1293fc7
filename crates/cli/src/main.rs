//! hanuchat CLI — terminal front-end for the campus services assistant.
//!
//! Reads questions from stdin and renders the conversation transcript.
//! The core pipeline lives in `hanuchat-chat`; this binary is only the
//! presentation collaborator: it supplies question strings, prints bot
//! replies, and triggers `/clear`.

use clap::Parser;
use hanuchat_chat::ChatSession;
use hanuchat_completion::HttpCompletionService;
use hanuchat_config::AppConfig;
use hanuchat_core::error::Error;
use hanuchat_retrieval::HttpDocumentRetriever;
use hanuchat_session::InMemorySessionStore;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(
    name = "hanuchat",
    about = "hanuchat — Hanoi University campus services assistant",
    version,
    author
)]
struct Cli {
    /// Path to a config file (defaults to ~/.hanuchat/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ask a single question and exit
    #[arg(short, long)]
    question: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let retriever = Arc::new(HttpDocumentRetriever::new(&config.retrieval_url));
    let completion = Arc::new(HttpCompletionService::new(&config.completion_url));
    let store = Arc::new(InMemorySessionStore::new(config.window_size));

    let mut session = ChatSession::new(
        retriever,
        completion,
        store,
        &config.topic,
        &config.greeting,
    );

    if let Some(question) = cli.question {
        return ask_once(&mut session, &question).await;
    }

    run_interactive(&mut session, &config).await
}

/// Single-question mode: print the answer (or nothing on failure) and exit.
async fn ask_once(session: &mut ChatSession, question: &str) -> anyhow::Result<()> {
    match session.submit_question(question).await {
        Ok(()) => {
            if let Some(entry) = session.transcript().last() {
                println!("{}", entry.message.render());
            }
            Ok(())
        }
        Err(Error::Validation(_)) => anyhow::bail!("Question must not be empty"),
        Err(e) => Err(e.into()),
    }
}

/// Interactive mode: a stdin/stdout chat loop.
async fn run_interactive(session: &mut ChatSession, config: &AppConfig) -> anyhow::Result<()> {
    println!("{}", config.greeting);
    if !config.faqs.is_empty() {
        println!("\nTry one of:");
        for faq in &config.faqs {
            println!("  - {faq}");
        }
    }
    println!("\nType a question, '/clear' to reset the conversation, 'exit' to quit.\n");

    let stdin = io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    loop {
        print!("you> ");
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break; // EOF (Ctrl+D)
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit" | "/exit" | "/quit" | ":q") {
            break;
        }
        if line == "/clear" {
            session.clear_session().await;
            println!("bot> {}", config.greeting);
            continue;
        }

        match session.submit_question(line).await {
            Ok(()) => {
                if let Some(entry) = session.transcript().last() {
                    println!("bot> {}", entry.message.render());
                }
            }
            // Failures stay silent in the transcript; diagnostics are logged
            Err(_) => continue,
        }
    }

    Ok(())
}
