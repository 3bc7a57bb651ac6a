// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Territories, aetherytes and gathering locations
//!
//! Map coordinates are stored as integers scaled by 100, so `1234` is the
//! in-game map coordinate `12.34`.

use crate::eorzea::UptimeSchedule;
use crate::gathering::GatheringType;
use std::sync::Arc;

/// Integral coordinate value meaning "unknown"
pub const UNSET_COORDINATE: i32 = 100;

/// Territory (zone) identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerritoryId(pub u32);

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aetheryte identifier; `0` is not a valid teleport destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AetheryteId(pub u32);

impl AetheryteId {
    pub const INVALID: AetheryteId = AetheryteId(0);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl std::fmt::Display for AetheryteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A teleport destination inside a territory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aetheryte {
    pub id: AetheryteId,
    pub name: String,
    pub territory: TerritoryId,
    pub x_coord: i32,
    pub y_coord: i32,
}

/// A map with its own coordinate scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    /// Map scale in percent (100 for most field zones)
    pub size_factor: u16,
    pub aetherytes: Vec<Aetheryte>,
}

/// Player position in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Integral map coordinates in the given territory (world X and Z)
    pub fn to_map(&self, territory: &Territory) -> (i32, i32) {
        (
            world_to_map(self.x, territory.size_factor),
            world_to_map(self.z, territory.size_factor),
        )
    }
}

/// Convert one world axis to an integral map coordinate
pub fn world_to_map(coord: f32, size_factor: u16) -> i32 {
    let scale = f64::from(size_factor.max(1));
    let map = 0.02 * f64::from(coord) + 2048.0 / scale + 1.0;
    (map * 100.0).round() as i32
}

/// A place where something can be gathered
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub territory: Arc<Territory>,
    pub integral_x: i32,
    pub integral_y: i32,
    pub closest_aetheryte: Option<Aetheryte>,
    pub gathering_type: GatheringType,
    /// Recurring uptime of timed nodes; fishing spots and regular nodes have none
    pub schedule: Option<UptimeSchedule>,
}

impl Location {
    /// False when either coordinate is the unset sentinel
    pub fn has_coordinates(&self) -> bool {
        self.integral_x != UNSET_COORDINATE && self.integral_y != UNSET_COORDINATE
    }

    pub fn map_link(&self) -> MapLink {
        MapLink {
            name: self.name.clone(),
            territory: self.territory.id,
            territory_name: self.territory.name.clone(),
            x: self.integral_x as f32 / 100.0,
            y: self.integral_y as f32 / 100.0,
        }
    }
}

/// A clickable map position
#[derive(Debug, Clone, PartialEq)]
pub struct MapLink {
    pub name: String,
    pub territory: TerritoryId,
    pub territory_name: String,
    pub x: f32,
    pub y: f32,
}

impl std::fmt::Display for MapLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) x: {:.1}, y: {:.1}",
            self.name, self.territory_name, self.x, self.y
        )
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
