// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mem0 REST API request/response types.

use mnemo_core::Turn;
use serde::{Deserialize, Serialize};

/// Body for `POST /v1/memories/search/`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    /// Free-text query; the service ranks stored memories against it.
    pub query: &'a str,
    /// Scope of the search.
    pub user_id: &'a str,
}

/// Body for `POST /v1/memories/`.
#[derive(Debug, Clone, Serialize)]
pub struct AddRequest<'a> {
    /// Conversation turns the service distills into memories.
    pub messages: Vec<ApiMessage>,
    /// Owner of the resulting memories.
    pub user_id: &'a str,
}

/// A single message in the Mem0 wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Role: "user" or "assistant".
    pub role: String,
    /// Message text.
    pub content: String,
}

impl From<&Turn> for ApiMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role.to_string(),
            content: turn.content.clone(),
        }
    }
}

/// Error body returned by the Mem0 API on non-success statuses.
///
/// The service is inconsistent about the field name, so both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// The most specific message available.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.error.as_deref())
    }
}
