// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only host game state and world geometry

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeGameState;

use gb_core::{Aetheryte, AetheryteId, Position, TerritoryId};

/// Snapshot queries about the player
pub trait GameState {
    /// Territory the player is currently in
    fn territory(&self) -> Option<TerritoryId>;

    /// Player world position, if a character is loaded
    fn player_position(&self) -> Option<Position>;

    fn is_attuned(&self, aetheryte: AetheryteId) -> bool;
}

/// Game state of a host with no character logged in
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineGameState;

impl GameState for OfflineGameState {
    fn territory(&self) -> Option<TerritoryId> {
        None
    }

    fn player_position(&self) -> Option<Position> {
        None
    }

    fn is_attuned(&self, _aetheryte: AetheryteId) -> bool {
        false
    }
}

/// Distance from an aetheryte to a node, in integral map units
///
/// Aetherytes and nodes may sit in different but connected areas, so the
/// metric is region aware and supplied by the host.
pub trait DistanceMetric {
    fn aetheryte_distance(&self, aetheryte: &Aetheryte, territory: TerritoryId, x: i32, y: i32)
        -> f64;
}

/// Straight-line distance within one territory; other territories are unreachable
#[derive(Clone, Copy, Debug, Default)]
pub struct MapDistance;

impl DistanceMetric for MapDistance {
    fn aetheryte_distance(
        &self,
        aetheryte: &Aetheryte,
        territory: TerritoryId,
        x: i32,
        y: i32,
    ) -> f64 {
        if aetheryte.territory != territory {
            return f64::INFINITY;
        }
        let dx = f64::from(aetheryte.x_coord - x);
        let dy = f64::from(aetheryte.y_coord - y);
        (dx * dx + dy * dy).sqrt()
    }
}
