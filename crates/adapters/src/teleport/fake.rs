// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake teleport adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TeleportAdapter, TeleportError};
use gb_core::AetheryteId;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Recorded teleport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeleportCall {
    Checked(AetheryteId),
    Unchecked(AetheryteId),
}

/// Fake teleport adapter for testing
#[derive(Clone, Default)]
pub struct FakeTeleportAdapter {
    calls: Arc<Mutex<Vec<TeleportCall>>>,
    unattuned: Arc<Mutex<HashSet<AetheryteId>>>,
}

impl FakeTeleportAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<TeleportCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Make checked teleports to this aetheryte fail as not attuned
    pub fn set_unattuned(&self, aetheryte: AetheryteId) {
        self.unattuned
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(aetheryte);
    }
}

impl TeleportAdapter for FakeTeleportAdapter {
    fn teleport(&self, aetheryte: AetheryteId) -> Result<(), TeleportError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(TeleportCall::Checked(aetheryte));

        if self
            .unattuned
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&aetheryte)
        {
            return Err(TeleportError::NotAttuned(aetheryte));
        }
        Ok(())
    }

    fn teleport_unchecked(&self, aetheryte: AetheryteId) -> Result<(), TeleportError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(TeleportCall::Unchecked(aetheryte));
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
