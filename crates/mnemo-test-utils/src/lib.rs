// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test utilities for the mnemo workspace.
//!
//! Provides mock implementations of the two service traits with scripted
//! responses and call recording, for tests that exercise the chat loop
//! without real HTTP traffic.

pub mod mock_memory;
pub mod mock_provider;

pub use mock_memory::{MockMemory, RecordedAdd, RecordedSearch};
pub use mock_provider::{MockProvider, RecordedCompletion};
