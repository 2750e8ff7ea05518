// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the mnemo chat agent.
//!
//! Provides the error type, the conversation domain types, and the trait
//! seams for the two remote services (completion provider and memory store)
//! used throughout the mnemo workspace.

pub mod error;
pub mod traits;
pub mod types;

pub use error::MnemoError;
pub use traits::{CompletionProvider, MemoryService};
pub use types::{MemoryRecord, Role, Transcript, Turn};
