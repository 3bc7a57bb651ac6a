// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake sequence adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SequenceAdapter, SequenceError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fake sequence adapter counting starts
#[derive(Clone, Default)]
pub struct FakeSequenceAdapter {
    starts: Arc<AtomicUsize>,
}

impl FakeSequenceAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the sequence was started
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

impl SequenceAdapter for FakeSequenceAdapter {
    fn start(&self) -> Result<(), SequenceError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
