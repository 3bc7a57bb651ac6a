// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake map adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{MapAdapter, MapError};
use gb_core::MapLink;
use std::sync::{Arc, Mutex};

/// Fake map adapter recording placed flags
#[derive(Clone, Default)]
pub struct FakeMapAdapter {
    flags: Arc<Mutex<Vec<MapLink>>>,
}

impl FakeMapAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all placed flags
    pub fn flags(&self) -> Vec<MapLink> {
        self.flags.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl MapAdapter for FakeMapAdapter {
    fn set_flag(&self, link: &MapLink) -> Result<(), MapError> {
        self.flags
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(link.clone());
        Ok(())
    }
}
