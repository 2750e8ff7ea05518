// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The interactive chat loop.
//!
//! Reads user input with readline history, runs one session step per line,
//! and prints the assistant reply. Runs until interrupted: Ctrl+C or Ctrl+D
//! during the read, or a SIGINT/SIGTERM raced against a pending step, all
//! exit cleanly. Any remote-service error propagates to the caller and
//! terminates the process.

use colored::Colorize;
use mnemo_agent::{install_signal_handler, ChatSession};
use mnemo_config::MnemoConfig;
use mnemo_core::{CompletionProvider, MemoryService, MnemoError};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

/// Runs the chat REPL until interrupted.
///
/// Exactly one session (and therefore one transcript and one user id) exists
/// for the lifetime of the loop. Empty input is forwarded to the services
/// as-is, not validated away.
pub async fn run_chat(
    config: &MnemoConfig,
    memory: &dyn MemoryService,
    provider: &dyn CompletionProvider,
) -> Result<(), MnemoError> {
    let token = install_signal_handler();

    let mut rl = DefaultEditor::new()
        .map_err(|e| MnemoError::Internal(format!("failed to initialize readline: {e}")))?;

    let mut session = ChatSession::new(config.agent.user_id.clone());
    info!(user_id = %config.agent.user_id, "chat session started");

    println!("{}", config.agent.name.bold().green());
    println!("{}\n", "Ctrl+C to exit.".dimmed());

    loop {
        if token.is_cancelled() {
            break;
        }

        match rl.readline("User: ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let reply = tokio::select! {
                    _ = token.cancelled() => break,
                    result = session.step(&line, memory, provider) => result?,
                };

                println!("\nAssistant: {reply}");
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                return Err(MnemoError::Internal(format!("readline failed: {e}")));
            }
        }
    }

    println!("{}", "exiting".dimmed());
    Ok(())
}
