// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversational session: one owned transcript plus the
//! single-iteration step contract.
//!
//! Each step augments the request with memories retrieved for the current
//! input, never stores the synthesized system turn, and persists exactly the
//! newest user/assistant pair back to the memory service.

use mnemo_core::{CompletionProvider, MemoryRecord, MemoryService, MnemoError, Transcript, Turn};
use tracing::debug;

/// Joins retrieved memory texts into the block embedded in the system prompt.
///
/// The separator is the literal `"/n -"` (not a newline). It is a formatting
/// artifact of the deployed prompt; stored conversations were distilled
/// against it, so correcting it would change observed model behavior.
pub fn join_memories(records: &[MemoryRecord]) -> String {
    records
        .iter()
        .map(|r| r.memory.as_str())
        .collect::<Vec<_>>()
        .join("/n -")
}

/// Builds the per-request system prompt embedding the joined memory text.
///
/// An empty `memory_text` is embedded as-is; the request proceeds either way.
pub fn build_system_prompt(memory_text: &str) -> String {
    format!(
        "answer the user's question honestly.\n\
         Here are some relevant information you may find useful that previous interactions with the user has taught us:\n\
         {memory_text}"
    )
}

/// A single-user conversational session.
///
/// Owns the append-only transcript for the lifetime of the process. The
/// transcript holds only user and assistant turns; the system turn is
/// synthesized fresh on every step and discarded after the request.
pub struct ChatSession {
    transcript: Transcript,
    user_id: String,
}

impl ChatSession {
    /// Creates an empty session for `user_id`.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            transcript: Transcript::new(),
            user_id: user_id.into(),
        }
    }

    /// The accumulated conversation history.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The user identifier this session is scoped to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Runs one loop iteration for `input` and returns the assistant reply.
    ///
    /// In order: append the user turn, search memories for the raw input,
    /// complete against [system prompt + full history], append the assistant
    /// turn, persist the new exchange. Exactly two turns are appended on
    /// success. Any service error propagates immediately; there is no retry
    /// and no fallback.
    pub async fn step(
        &mut self,
        input: &str,
        memory: &dyn MemoryService,
        provider: &dyn CompletionProvider,
    ) -> Result<String, MnemoError> {
        self.transcript.push(Turn::user(input));

        let records = memory.search(input, &self.user_id).await?;
        debug!(count = records.len(), "related memories retrieved");

        let memory_text = join_memories(&records);
        let system = build_system_prompt(&memory_text);

        let reply = provider.complete(&system, self.transcript.turns()).await?;

        self.transcript.push(Turn::assistant(reply.clone()));

        // Persist only the just-completed exchange, never the system turn.
        memory
            .add(self.transcript.last_exchange(), &self.user_id)
            .await?;

        Ok(reply)
    }
}
