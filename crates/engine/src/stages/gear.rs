// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gear change stage

use crate::context::StageContext;
use crate::request::GatherRequest;
use gb_core::{Config, Effect, GatheringType, Message};

pub(crate) fn run(request: &mut GatherRequest, ctx: &StageContext<'_>) -> Vec<Effect> {
    if !ctx.config.use_gear_change {
        return Vec::new();
    }
    let Some(location) = &request.location else {
        return Vec::new();
    };

    let Some(set) = gear_set(ctx.config, location.gathering_type) else {
        return vec![Effect::Print(
            Message::error()
                .text("No job type associated with location ")
                .arg(&location.name, ctx.color())
                .text("."),
        )];
    };

    if set.is_empty() {
        return vec![Effect::Print(
            Message::error()
                .text("No gear set for ")
                .arg(location.gathering_type.name(), ctx.color())
                .text(" configured."),
        )];
    }

    tracing::debug!(set, location = %location.name, "changing gear");
    vec![Effect::gearset_change(set)]
}

/// Configured gear set for the job that gathers `kind`
fn gear_set(config: &Config, kind: GatheringType) -> Option<&str> {
    match kind.to_group() {
        GatheringType::Miner => Some(config.miner_set_name.as_str()),
        GatheringType::Botanist => Some(config.botanist_set_name.as_str()),
        GatheringType::Fisher => Some(config.fisher_set_name.as_str()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "gear_tests.rs"]
mod tests;
