// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion provider trait for hosted chat-completion APIs.

use async_trait::async_trait;

use crate::error::MnemoError;
use crate::types::Turn;

/// A remote chat-completion service.
///
/// The system prompt is passed separately from the accumulated history:
/// it is synthesized fresh for every request and must never enter the
/// stored transcript.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends the system prompt plus the full conversation history and
    /// returns the assistant's reply text.
    async fn complete(&self, system: &str, history: &[Turn]) -> Result<String, MnemoError>;
}
