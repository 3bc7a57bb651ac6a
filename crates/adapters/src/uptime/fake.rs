// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake uptime ranker for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Availability, UptimeRanker};
use chrono::{DateTime, Utc};
use gb_core::{Gatherable, GatheringType, Item, ItemId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded ranking query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UptimeQuery {
    Best {
        item: ItemId,
    },
    Next {
        item: ItemId,
        kind: GatheringType,
        now: DateTime<Utc>,
    },
}

/// Ranker answering from fixed per-item tables
#[derive(Clone, Default)]
pub struct FakeUptimeRanker {
    best: HashMap<ItemId, Availability>,
    next: HashMap<(ItemId, GatheringType), Availability>,
    queries: Arc<Mutex<Vec<UptimeQuery>>>,
}

impl FakeUptimeRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `best_location` for this item
    pub fn with_best(mut self, item: ItemId, availability: Availability) -> Self {
        self.best.insert(item, availability);
        self
    }

    /// Answer `next_uptime` for this item and job category
    pub fn with_next(
        mut self,
        item: ItemId,
        kind: GatheringType,
        availability: Availability,
    ) -> Self {
        self.next.insert((item, kind), availability);
        self
    }

    /// Get all recorded queries
    pub fn queries(&self) -> Vec<UptimeQuery> {
        self.queries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, query: UptimeQuery) {
        self.queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query);
    }
}

impl UptimeRanker for FakeUptimeRanker {
    fn best_location(&self, target: &Gatherable) -> Option<Availability> {
        self.record(UptimeQuery::Best { item: target.id() });
        self.best.get(&target.id()).cloned()
    }

    fn next_uptime(
        &self,
        item: &Item,
        kind: GatheringType,
        now: DateTime<Utc>,
    ) -> Option<Availability> {
        self.record(UptimeQuery::Next {
            item: item.id,
            kind,
            now,
        });
        self.next.get(&(item.id, kind)).cloned()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
