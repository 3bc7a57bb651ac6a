// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Map flag adapters

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeMapAdapter;

use gb_core::MapLink;
use thiserror::Error;

/// Errors from placing map flags
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map unavailable: {0}")]
    Unavailable(String),
}

/// Adapter for placing the in-game map flag
pub trait MapAdapter: Clone + Send + Sync + 'static {
    fn set_flag(&self, link: &MapLink) -> Result<(), MapError>;
}

/// Map adapter that ignores flags
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpMapAdapter;

impl MapAdapter for NoOpMapAdapter {
    fn set_flag(&self, _link: &MapLink) -> Result<(), MapError> {
        Ok(())
    }
}
