// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Teleport stage and the standalone teleport helpers

use crate::context::StageContext;
use crate::request::GatherRequest;
use gb_adapters::GameState;
use gb_core::{Aetheryte, Color, Effect, Location, Message, Territory};

/// Walking is preferred while the player is closer to the node than this
/// multiple of the aetheryte's distance
pub const TELEPORT_LEEWAY: f64 = 1.5;

pub(crate) fn run(request: &mut GatherRequest, ctx: &StageContext<'_>) -> Vec<Effect> {
    if !ctx.config.use_teleport {
        return Vec::new();
    }
    let Some(location) = &request.location else {
        return Vec::new();
    };
    let Some(aetheryte) = &location.closest_aetheryte else {
        return Vec::new();
    };

    if ctx.config.skip_teleport_if_close && player_is_close(location, aetheryte, ctx) {
        tracing::debug!(location = %location.name, "player close to node, not teleporting");
        return Vec::new();
    }

    teleport_to_aetheryte(aetheryte).into_iter().collect()
}

fn player_is_close(location: &Location, aetheryte: &Aetheryte, ctx: &StageContext<'_>) -> bool {
    let territory = &location.territory;
    if ctx.game.territory() != Some(territory.id) {
        return false;
    }
    let Some(position) = ctx.game.player_position() else {
        return false;
    };

    let (x, y) = position.to_map(territory);
    let dx = f64::from(x) - f64::from(location.integral_x);
    let dy = f64::from(y) - f64::from(location.integral_y);
    let player = (dx * dx + dy * dy).sqrt();
    let waypoint = ctx.distance.aetheryte_distance(
        aetheryte,
        territory.id,
        location.integral_x,
        location.integral_y,
    );

    tracing::debug!(player, waypoint, "distance to node");
    player < waypoint * TELEPORT_LEEWAY
}

/// Teleport to an aetheryte; `None` for the invalid id 0
pub fn teleport_to_aetheryte(aetheryte: &Aetheryte) -> Option<Effect> {
    aetheryte
        .id
        .is_valid()
        .then_some(Effect::Teleport {
            aetheryte: aetheryte.id,
        })
}

/// Teleport to the first attuned aetheryte of a territory
///
/// Reports an error message instead when the territory has no aetheryte or
/// none of them are attuned.
pub fn teleport_to_territory(territory: &Territory, game: &dyn GameState, color: Color) -> Effect {
    if territory.aetherytes.is_empty() {
        return Effect::Print(
            Message::error()
                .arg(&territory.name, color)
                .text(" has no valid aetheryte."),
        );
    }

    match territory.aetherytes.iter().find(|a| game.is_attuned(a.id)) {
        Some(aetheryte) => Effect::TeleportUnchecked {
            aetheryte: aetheryte.id,
        },
        None => Effect::Print(
            Message::error()
                .text("Not attuned to any aetheryte in ")
                .arg(&territory.name, color)
                .text("."),
        ),
    }
}

#[cfg(test)]
#[path = "teleport_tests.rs"]
mod tests;
