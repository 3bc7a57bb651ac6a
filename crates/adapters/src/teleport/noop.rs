// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op teleport adapter for when teleporting is unavailable.

use super::{TeleportAdapter, TeleportError};
use gb_core::AetheryteId;

/// Teleport adapter that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpTeleportAdapter;

impl NoOpTeleportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl TeleportAdapter for NoOpTeleportAdapter {
    fn teleport(&self, _aetheryte: AetheryteId) -> Result<(), TeleportError> {
        Ok(())
    }

    fn teleport_unchecked(&self, _aetheryte: AetheryteId) -> Result<(), TeleportError> {
        Ok(())
    }
}
