// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action sequence trigger adapters
//!
//! Registering a gather request starts the host's staged action sequence
//! (a macro). The sequence later calls back into the dispatcher once per
//! stage token.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSequenceAdapter;

use thiserror::Error;

/// Errors from starting the action sequence
#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("action sequence could not start: {0}")]
    StartFailed(String),
}

/// Adapter for starting the staged action sequence
pub trait SequenceAdapter: Clone + Send + Sync + 'static {
    fn start(&self) -> Result<(), SequenceError>;
}

/// Sequence adapter for hosts that drive the stages themselves
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSequenceAdapter;

impl SequenceAdapter for NoOpSequenceAdapter {
    fn start(&self) -> Result<(), SequenceError> {
        Ok(())
    }
}
