// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake identificator for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::Identificator;
use gb_core::{Fish, Gatherable};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded identification query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifyQuery {
    Gatherable(String),
    Fish(String),
}

/// Identificator with a fixed, case-insensitive name table
#[derive(Clone, Default)]
pub struct FakeIdentificator {
    gatherables: HashMap<String, Gatherable>,
    fish: HashMap<String, Fish>,
    queries: Arc<Mutex<Vec<IdentifyQuery>>>,
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl FakeIdentificator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `identify_gatherable(name)` with `gatherable`; fish also answer `identify_fish`
    pub fn with(mut self, name: &str, gatherable: impl Into<Gatherable>) -> Self {
        let gatherable = gatherable.into();
        if let Gatherable::Fish(fish) = &gatherable {
            self.fish.insert(key(name), fish.clone());
        }
        self.gatherables.insert(key(name), gatherable);
        self
    }

    /// Get all recorded queries
    pub fn queries(&self) -> Vec<IdentifyQuery> {
        self.queries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, query: IdentifyQuery) {
        self.queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query);
    }
}

impl Identificator for FakeIdentificator {
    fn identify_gatherable(&self, name: &str) -> Option<Gatherable> {
        self.record(IdentifyQuery::Gatherable(name.to_string()));
        self.gatherables.get(&key(name)).cloned()
    }

    fn identify_fish(&self, name: &str) -> Option<Fish> {
        self.record(IdentifyQuery::Fish(name.to_string()));
        self.fish.get(&key(name)).cloned()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
