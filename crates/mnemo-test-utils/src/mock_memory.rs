// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock memory service for deterministic testing.
//!
//! `MockMemory` implements `MemoryService` with scripted search results and
//! records every search and add call for assertions.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use mnemo_core::{MemoryRecord, MemoryService, MnemoError, Turn};

/// A recorded search call: query plus user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub query: String,
    pub user_id: String,
}

/// A recorded add call: the turns submitted plus the owning user id.
#[derive(Debug, Clone)]
pub struct RecordedAdd {
    pub turns: Vec<Turn>,
    pub user_id: String,
}

/// A mock memory service with scripted search results.
///
/// Search results are popped from a FIFO queue; an exhausted queue yields
/// an empty result, matching a user with no stored memories.
pub struct MockMemory {
    search_results: Arc<Mutex<VecDeque<Vec<MemoryRecord>>>>,
    searches: Arc<Mutex<Vec<RecordedSearch>>>,
    adds: Arc<Mutex<Vec<RecordedAdd>>>,
    fail: bool,
}

impl MockMemory {
    /// Create a mock memory service that always returns empty results.
    pub fn new() -> Self {
        Self {
            search_results: Arc::new(Mutex::new(VecDeque::new())),
            searches: Arc::new(Mutex::new(Vec::new())),
            adds: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a mock pre-loaded with per-call search results.
    pub fn with_results(results: Vec<Vec<MemoryRecord>>) -> Self {
        Self {
            search_results: Arc::new(Mutex::new(VecDeque::from(results))),
            searches: Arc::new(Mutex::new(Vec::new())),
            adds: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a mock that fails every call.
    pub fn failing() -> Self {
        Self {
            search_results: Arc::new(Mutex::new(VecDeque::new())),
            searches: Arc::new(Mutex::new(Vec::new())),
            adds: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// All search calls recorded so far, in order.
    pub async fn searches(&self) -> Vec<RecordedSearch> {
        self.searches.lock().await.clone()
    }

    /// All add calls recorded so far, in order.
    pub async fn adds(&self) -> Vec<RecordedAdd> {
        self.adds.lock().await.clone()
    }
}

impl Default for MockMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemoryService for MockMemory {
    async fn search(
        &self,
        query: &str,
        user_id: &str,
    ) -> Result<Vec<MemoryRecord>, MnemoError> {
        if self.fail {
            return Err(MnemoError::Memory {
                message: "mock memory failure".into(),
                source: None,
            });
        }
        self.searches.lock().await.push(RecordedSearch {
            query: query.to_string(),
            user_id: user_id.to_string(),
        });
        Ok(self
            .search_results
            .lock()
            .await
            .pop_front()
            .unwrap_or_default())
    }

    async fn add(&self, turns: &[Turn], user_id: &str) -> Result<(), MnemoError> {
        if self.fail {
            return Err(MnemoError::Memory {
                message: "mock memory failure".into(),
                source: None,
            });
        }
        self.adds.lock().await.push(RecordedAdd {
            turns: turns.to_vec(),
            user_id: user_id.to_string(),
        });
        Ok(())
    }
}
