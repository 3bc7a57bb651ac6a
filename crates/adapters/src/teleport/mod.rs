// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Teleport execution adapters

mod noop;

pub use noop::NoOpTeleportAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTeleportAdapter, TeleportCall};

use gb_core::AetheryteId;
use thiserror::Error;

/// Errors from teleporting
#[derive(Debug, Error)]
pub enum TeleportError {
    #[error("invalid aetheryte: {0}")]
    InvalidAetheryte(AetheryteId),
    #[error("not attuned to aetheryte {0}")]
    NotAttuned(AetheryteId),
    #[error("teleport failed: {0}")]
    Failed(String),
}

/// Adapter for teleporting the player
pub trait TeleportAdapter: Clone + Send + Sync + 'static {
    /// Teleport after the host checked attunement and cost
    fn teleport(&self, aetheryte: AetheryteId) -> Result<(), TeleportError>;

    /// Teleport without host-side checks
    fn teleport_unchecked(&self, aetheryte: AetheryteId) -> Result<(), TeleportError>;
}
