// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive chat REPL.
//!
//! Reads visitor messages with rustyline, runs each through the dispatch
//! loop and prints the assistant's reply. A failed turn is reported and the
//! loop keeps going.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use easeentry_agent::{DispatchLoop, DispatchSettings, Session, load_system_prompt};
use easeentry_booking::BookingClient;
use easeentry_config::EaseEntryConfig;
use easeentry_core::EaseEntryError;
use easeentry_groq::GroqProvider;
use easeentry_tools::{ToolRegistry, register_builtins};
use indicatif::ProgressBar;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

const TITLE: &str = "Athena Museum Booking Assistant";
const GREETING: &str = "Welcome to the Athena Museum Booking Assistant. How may I help you today?";

/// Wire up the assistant and run the chat until the visitor leaves.
pub async fn run_chat(config: EaseEntryConfig) -> Result<(), EaseEntryError> {
    let provider = GroqProvider::new(&config.provider).inspect_err(|_| {
        eprintln!(
            "error: Groq API key required. Set provider.api_key in easeentry.toml or the GROQ_API_KEY env var."
        );
    })?;

    let client = Arc::new(BookingClient::new(&config.booking)?);
    let mut registry = ToolRegistry::new();
    register_builtins(&mut registry, client)?;
    info!(tools = registry.len(), "tool registry initialized");

    let system_prompt = load_system_prompt(&config).await;
    let mut dispatch = DispatchLoop::new(
        Arc::new(provider),
        Arc::new(registry),
        DispatchSettings::from_config(&config, system_prompt),
    )?;
    let mut session = Session::new();
    info!(session_id = %session.id(), "chat session started");

    let mut rl = DefaultEditor::new()
        .map_err(|e| EaseEntryError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", TITLE.bold().green());
    println!("{GREETING}");
    println!("Type {} to leave.\n", "/quit".yellow());

    let prompt = format!("{}> ", "you".cyan());
    let speaker = config.agent.name.as_str();
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if is_exit_command(trimmed) {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let spinner = thinking_spinner();
                let result = dispatch.handle_turn(&mut session, trimmed).await;
                spinner.finish_and_clear();

                match result {
                    Ok(outcome) => {
                        println!("{}: {}\n", speaker.green().bold(), outcome.reply);
                    }
                    Err(e) => {
                        eprintln!("{}: {e}\n", "error".red().bold());
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    info!(
        session_id = %session.id(),
        turns = session.len(),
        "chat session ended"
    );
    println!("{}", "Goodbye!".dimmed());
    Ok(())
}

fn is_exit_command(input: &str) -> bool {
    matches!(input, "/quit" | "/exit")
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
