// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host command channel adapters

mod noop;

pub use noop::NoOpCommandAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeCommandAdapter;

use thiserror::Error;

/// Errors from issuing host commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command rejected: {0}")]
    Rejected(String),
    #[error("command channel unavailable")]
    Unavailable,
}

/// Adapter for sending text commands (e.g. `/gearset change "Miner"`) to the host
pub trait CommandAdapter: Clone + Send + Sync + 'static {
    fn execute(&self, command: &str) -> Result<(), CommandError>;
}
