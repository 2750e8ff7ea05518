// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mem0 hosted memory service adapter for mnemo.
//!
//! Implements [`MemoryService`] over the Mem0 REST API. mnemo treats the
//! service as a black box: it supplies a query and a user id, consumes the
//! returned memory texts, and submits finished exchanges for persistence.

pub mod client;
pub mod types;

use async_trait::async_trait;
use mnemo_config::MnemoConfig;
use mnemo_core::{MemoryRecord, MemoryService, MnemoError, Turn};
use tracing::info;

pub use client::Mem0Client;

impl Mem0Client {
    /// Creates a client from configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.mem0.api_key` if set and non-empty
    /// 2. `MEM0_API_KEY` environment variable
    /// 3. Returns a config error if neither is available
    pub fn from_config(config: &MnemoConfig) -> Result<Self, MnemoError> {
        let api_key = resolve_api_key(&config.mem0.api_key)?;
        let client = Self::new(api_key, config.mem0.base_url.clone())?;
        info!(base_url = %config.mem0.base_url, "Mem0 memory service initialized");
        Ok(client)
    }
}

#[async_trait]
impl MemoryService for Mem0Client {
    async fn search(
        &self,
        query: &str,
        user_id: &str,
    ) -> Result<Vec<MemoryRecord>, MnemoError> {
        Mem0Client::search(self, query, user_id).await
    }

    async fn add(&self, turns: &[Turn], user_id: &str) -> Result<(), MnemoError> {
        Mem0Client::add(self, turns, user_id).await
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, MnemoError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("MEM0_API_KEY").map_err(|_| {
        MnemoError::Config(
            "Mem0 API key not found. Set mem0.api_key in config or MEM0_API_KEY environment variable.".into(),
        )
    })
}
