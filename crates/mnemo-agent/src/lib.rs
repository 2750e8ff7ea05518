// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversational session logic for mnemo.
//!
//! [`ChatSession`] owns the append-only transcript and implements the
//! memory-augmentation step that drives every loop iteration;
//! [`install_signal_handler`] provides the cancellation token the binary's
//! REPL races against pending work.

pub mod session;
pub mod shutdown;

pub use session::{build_system_prompt, join_memories, ChatSession};
pub use shutdown::install_signal_handler;
