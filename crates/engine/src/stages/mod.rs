// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage tokens and their handlers
//!
//! The host's action sequence calls back with one token per step. Each
//! handler checks its own preconditions against the current request, so
//! stages may run in any order and any number of times.

mod gear;
mod identify;
mod map_marker;
mod status;
mod teleport;

pub use teleport::{teleport_to_aetheryte, teleport_to_territory, TELEPORT_LEEWAY};

use crate::context::StageContext;
use crate::request::GatherRequest;
use gb_core::Effect;

/// One step of the action sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Identify,
    MapMarker,
    GearChange,
    Teleport,
    AdditionalInfo,
}

impl Stage {
    pub fn token(self) -> &'static str {
        match self {
            Stage::Identify => "identify",
            Stage::MapMarker => "mapmarker",
            Stage::GearChange => "gearchange",
            Stage::Teleport => "teleport",
            Stage::AdditionalInfo => "additionalinfo",
        }
    }

    /// Exact, case-sensitive token match
    pub fn parse(token: &str) -> Option<Stage> {
        STAGES
            .iter()
            .map(|(stage, _)| *stage)
            .find(|stage| stage.token() == token)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

pub type StageHandler = fn(&mut GatherRequest, &StageContext<'_>) -> Vec<Effect>;

pub const STAGES: [(Stage, StageHandler); 5] = [
    (Stage::Identify, identify::run),
    (Stage::MapMarker, map_marker::run),
    (Stage::GearChange, gear::run),
    (Stage::Teleport, teleport::run),
    (Stage::AdditionalInfo, status::run),
];

/// Run the handler for `token`; `None` when the token is not a stage
pub fn dispatch(
    token: &str,
    request: &mut GatherRequest,
    ctx: &StageContext<'_>,
) -> Option<Vec<Effect>> {
    let stage = Stage::parse(token)?;
    let (_, handler) = STAGES.iter().find(|(s, _)| *s == stage)?;

    tracing::debug!(%stage, sequence = request.sequence, "running stage");
    Some(handler(request, ctx))
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
