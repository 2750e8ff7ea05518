// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memory service trait for hosted long-term memory stores.

use async_trait::async_trait;

use crate::error::MnemoError;
use crate::types::{MemoryRecord, Turn};

/// A remote memory store scoped by user identifier.
///
/// mnemo never implements storage or retrieval ranking itself; it only
/// supplies a query plus a user id and consumes the returned record texts.
#[async_trait]
pub trait MemoryService: Send + Sync {
    /// Searches for memories semantically related to `query`.
    ///
    /// Returns records in the service's ranking order; an empty result is
    /// not an error.
    async fn search(&self, query: &str, user_id: &str)
        -> Result<Vec<MemoryRecord>, MnemoError>;

    /// Persists conversation turns as new memory material for `user_id`.
    ///
    /// Callers pass exactly the newest user/assistant pair; nothing beyond
    /// the acknowledgment status is consumed.
    async fn add(&self, turns: &[Turn], user_id: &str) -> Result<(), MnemoError>;
}
