// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat output adapters

mod log;

pub use log::LogChatAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeChatAdapter;

use gb_core::Message;
use thiserror::Error;

/// Errors from chat output
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat unavailable: {0}")]
    Unavailable(String),
}

/// Adapter for printing messages to the player
pub trait ChatAdapter: Clone + Send + Sync + 'static {
    fn print(&self, message: &Message) -> Result<(), ChatError>;
}
