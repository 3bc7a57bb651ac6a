// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single live gather request
//!
//! A request is built fresh by every registration and then narrowed by
//! the stages. Constructors always start from [`GatherRequest::default`]
//! so nothing from a previous request survives.

use chrono::{DateTime, Utc};
use gb_core::{Gatherable, GatheringType, Location, TimeWindow};

/// Which deferred name resolution the identify stage still has to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifyKind {
    #[default]
    None,
    ByItemName,
    ByFishName,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GatherRequest {
    /// Registration counter, used to correlate log lines
    pub sequence: u64,
    pub identify_kind: IdentifyKind,
    pub pending_name: String,
    pub target: Option<Gatherable>,
    /// Job category narrowing the location search
    pub type_constraint: Option<GatheringType>,
    pub location: Option<Location>,
    pub window: TimeWindow,
}

impl GatherRequest {
    /// Gather at a known location; its own schedule gives the window
    pub fn for_location(location: Location, now: DateTime<Utc>) -> Self {
        let window = location
            .schedule
            .as_ref()
            .map(|schedule| schedule.next_uptime(now))
            .unwrap_or(TimeWindow::ALWAYS);
        Self {
            type_constraint: Some(location.gathering_type.to_group()),
            location: Some(location),
            window,
            ..Self::default()
        }
    }

    /// Gather an already resolved item or fish
    pub fn for_item(target: Gatherable, kind: Option<GatheringType>) -> Self {
        let type_constraint = if target.is_fish() {
            None
        } else {
            kind.map(GatheringType::to_group)
        };
        Self {
            target: Some(target),
            type_constraint,
            ..Self::default()
        }
    }

    /// Gather an item by name; `None` for an empty name
    pub fn for_item_name(name: &str, kind: Option<GatheringType>) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Some(Self {
            identify_kind: IdentifyKind::ByItemName,
            pending_name: name.to_string(),
            type_constraint: kind,
            ..Self::default()
        })
    }

    /// Gather a fish by name; `None` for an empty name
    pub fn for_fish_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Some(Self {
            identify_kind: IdentifyKind::ByFishName,
            pending_name: name.to_string(),
            ..Self::default()
        })
    }

    /// Whether a name still waits for the identify stage
    pub fn is_pending(&self) -> bool {
        self.identify_kind != IdentifyKind::None && !self.pending_name.is_empty()
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match (self.identify_kind, &self.target, &self.location) {
            (IdentifyKind::ByItemName, _, _) => "item_name",
            (IdentifyKind::ByFishName, _, _) => "fish_name",
            (IdentifyKind::None, Some(_), _) => "item",
            (IdentifyKind::None, None, Some(_)) => "location",
            (IdentifyKind::None, None, None) => "empty",
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
