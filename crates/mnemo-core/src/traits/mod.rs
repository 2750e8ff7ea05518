// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service trait definitions for the two remote collaborators.
//!
//! Both traits use `#[async_trait]` for dynamic dispatch so the chat loop
//! can be driven by real HTTP clients in the binary and by scripted mocks
//! in tests.

pub mod memory;
pub mod provider;

pub use memory::MemoryService;
pub use provider::CompletionProvider;
