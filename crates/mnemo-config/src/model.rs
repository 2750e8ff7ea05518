// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the mnemo chat agent.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level mnemo configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MnemoConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Mem0 memory service settings.
    #[serde(default)]
    pub mem0: Mem0Config,

    /// OpenAI completion service settings.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// User identifier sent with every memory operation. Fixed for the
    /// lifetime of the process.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            user_id: default_user_id(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "mnemo".to_string()
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Mem0 memory service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Mem0Config {
    /// Mem0 API key. `None` falls back to the `MEM0_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the Mem0 REST API.
    #[serde(default = "default_mem0_base_url")]
    pub base_url: String,
}

impl Default for Mem0Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_mem0_base_url(),
        }
    }
}

fn default_mem0_base_url() -> String {
    "https://api.mem0.ai".to_string()
}

/// OpenAI completion service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// OpenAI API key. `None` falls back to the `OPENAI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier for chat completions.
    #[serde(default = "default_model")]
    pub model: String,

    /// Reasoning effort hint forwarded to the completion API.
    #[serde(default = "default_reasoning_effort")]
    pub reasoning_effort: String,

    /// Base URL of the OpenAI API.
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            reasoning_effort: default_reasoning_effort(),
            base_url: default_openai_base_url(),
        }
    }
}

fn default_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_reasoning_effort() -> String {
    "minimal".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}
