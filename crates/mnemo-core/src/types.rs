// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation domain types shared across the mnemo workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role of a conversation turn.
///
/// Serialized lowercase on both the completion and memory wire formats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single conversation turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Creates a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Ordered, append-only conversation history for the lifetime of a session.
///
/// Holds only user and assistant turns. The per-request system turn is
/// synthesized fresh each iteration and never stored here. The transcript is
/// never truncated and never persisted locally; long-term persistence is
/// delegated to the remote memory service.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn. Insertion order is preserved.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The newest user/assistant exchange: the final two turns, or fewer
    /// when the transcript is shorter than that.
    pub fn last_exchange(&self) -> &[Turn] {
        let start = self.turns.len().saturating_sub(2);
        &self.turns[start..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// A memory record returned by the remote memory service.
///
/// The service owns the full record shape; locally only the `memory` text is
/// consumed. The field is required: a record without it fails
/// deserialization, and that error propagates like any other remote failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub memory: String,
}
