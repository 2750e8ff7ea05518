// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the mnemo chat agent.

use thiserror::Error;

/// The primary error type used across mnemo crates.
///
/// Remote-service failures are never retried or recovered locally; they
/// propagate out of the chat loop and terminate the process with a non-zero
/// exit code.
#[derive(Debug, Error)]
pub enum MnemoError {
    /// Configuration errors (invalid TOML, missing API keys, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Memory service errors (transport failure, auth rejection, malformed response).
    #[error("memory service error: {message}")]
    Memory {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Completion provider errors (API failure, empty response, malformed body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
