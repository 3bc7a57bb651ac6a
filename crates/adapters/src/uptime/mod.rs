// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Location and uptime ranking
//!
//! Deciding which location is best for a gatherable is the host's
//! business. Stages only pick which of the two query shapes to issue.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeUptimeRanker, UptimeQuery};

use chrono::{DateTime, Utc};
use gb_core::{Gatherable, GatheringType, Item, Location, TimeWindow};

/// Where a gatherable can be found and when it is up there
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub location: Location,
    pub window: TimeWindow,
}

/// Ranks locations for a gatherable
pub trait UptimeRanker {
    /// Best location across all job categories
    fn best_location(&self, target: &Gatherable) -> Option<Availability>;

    /// Next uptime of an item among locations of one job category
    fn next_uptime(
        &self,
        item: &Item,
        kind: GatheringType,
        now: DateTime<Utc>,
    ) -> Option<Availability>;
}

/// Ranker that never finds a location
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpUptimeRanker;

impl UptimeRanker for NoOpUptimeRanker {
    fn best_location(&self, _target: &Gatherable) -> Option<Availability> {
        None
    }

    fn next_uptime(
        &self,
        _item: &Item,
        _kind: GatheringType,
        _now: DateTime<Utc>,
    ) -> Option<Availability> {
        None
    }
}
