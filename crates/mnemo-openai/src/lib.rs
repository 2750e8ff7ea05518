// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI Chat Completions provider adapter for mnemo.
//!
//! Implements [`CompletionProvider`] over the OpenAI REST API. Each request
//! carries the per-iteration system prompt followed by the entire
//! accumulated conversation history.

pub mod client;
pub mod types;

use async_trait::async_trait;
use mnemo_config::MnemoConfig;
use mnemo_core::{CompletionProvider, MnemoError, Turn};
use tracing::info;

pub use client::OpenAiClient;

impl OpenAiClient {
    /// Creates a client from configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.openai.api_key` if set and non-empty
    /// 2. `OPENAI_API_KEY` environment variable
    /// 3. Returns a config error if neither is available
    pub fn from_config(config: &MnemoConfig) -> Result<Self, MnemoError> {
        let api_key = resolve_api_key(&config.openai.api_key)?;
        let client = Self::new(
            api_key,
            config.openai.model.clone(),
            config.openai.reasoning_effort.clone(),
            config.openai.base_url.clone(),
        )?;
        info!(model = %config.openai.model, "OpenAI completion provider initialized");
        Ok(client)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, system: &str, history: &[Turn]) -> Result<String, MnemoError> {
        OpenAiClient::complete(self, system, history).await
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, MnemoError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("OPENAI_API_KEY").map_err(|_| {
        MnemoError::Config(
            "OpenAI API key not found. Set openai.api_key in config or OPENAI_API_KEY environment variable.".into(),
        )
    })
}
