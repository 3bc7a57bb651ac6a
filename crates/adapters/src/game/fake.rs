// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake game state for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::GameState;
use gb_core::{AetheryteId, Position, TerritoryId};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inner {
    territory: Option<TerritoryId>,
    position: Option<Position>,
    attuned: HashSet<AetheryteId>,
}

/// Settable game state shared between clones
#[derive(Clone, Default)]
pub struct FakeGameState {
    inner: Arc<Mutex<Inner>>,
}

impl FakeGameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the player in a territory at a world position
    pub fn place_player(&self, territory: TerritoryId, position: Position) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.territory = Some(territory);
        inner.position = Some(position);
    }

    /// Put the player in a territory with no known position (e.g. loading)
    pub fn set_territory(&self, territory: Option<TerritoryId>) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.territory = territory;
        inner.position = None;
    }

    pub fn attune(&self, aetheryte: AetheryteId) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .attuned
            .insert(aetheryte);
    }
}

impl GameState for FakeGameState {
    fn territory(&self) -> Option<TerritoryId> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).territory
    }

    fn player_position(&self) -> Option<Position> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).position
    }

    fn is_attuned(&self, aetheryte: AetheryteId) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .attuned
            .contains(&aetheryte)
    }
}
