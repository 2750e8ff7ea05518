// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion provider for deterministic testing.
//!
//! `MockProvider` implements `CompletionProvider` with pre-configured
//! responses, enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use mnemo_core::{CompletionProvider, MnemoError, Turn};

/// A recorded completion call: the system prompt and the history sent.
#[derive(Debug, Clone)]
pub struct RecordedCompletion {
    pub system: String,
    pub history: Vec<Turn>,
}

/// A mock completion provider that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty, a default
/// "mock reply" text is returned. Every call is recorded for assertions.
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<String>>>,
    calls: Arc<Mutex<Vec<RecordedCompletion>>>,
    fail: bool,
}

impl MockProvider {
    /// Create a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a mock provider pre-loaded with the given replies.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a mock provider that fails every call.
    pub fn failing() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// All calls recorded so far, in order.
    pub async fn calls(&self) -> Vec<RecordedCompletion> {
        self.calls.lock().await.clone()
    }

    async fn next_response(&self) -> String {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock reply".to_string())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, system: &str, history: &[Turn]) -> Result<String, MnemoError> {
        if self.fail {
            return Err(MnemoError::Provider {
                message: "mock provider failure".into(),
                source: None,
            });
        }
        self.calls.lock().await.push(RecordedCompletion {
            system: system.to_string(),
            history: history.to_vec(),
        });
        Ok(self.next_response().await)
    }
}
