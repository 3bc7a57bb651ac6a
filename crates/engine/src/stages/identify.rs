// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identify stage: resolve a pending name, then its availability

use crate::availability;
use crate::context::StageContext;
use crate::request::{GatherRequest, IdentifyKind};
use gb_core::{interpolate, Effect, Gatherable, Message};
use std::collections::HashMap;

pub(crate) fn run(request: &mut GatherRequest, ctx: &StageContext<'_>) -> Vec<Effect> {
    if !request.is_pending() {
        return Vec::new();
    }

    let name = request.pending_name.as_str();
    let (target, format) = match request.identify_kind {
        IdentifyKind::None => return Vec::new(),
        IdentifyKind::ByItemName => (
            ctx.identificator.identify_gatherable(name),
            &ctx.config.identified_item_format,
        ),
        IdentifyKind::ByFishName => (
            ctx.identificator.identify_fish(name).map(Gatherable::Fish),
            &ctx.config.identified_fish_format,
        ),
    };

    let Some(target) = target else {
        tracing::debug!(input = name, "no gatherable matches name");
        request.target = None;
        return vec![Effect::Print(
            Message::error()
                .text("Could not find corresponding item to \"")
                .arg(name, ctx.color())
                .text("\"."),
        )];
    };

    tracing::debug!(id = %target.id(), name = target.name(), input = name, "identified");

    let mut effects = Vec::new();
    if !format.is_empty() {
        effects.push(Effect::Print(
            Message::info().text(identified_message(format, name, &target)),
        ));
    }

    if target.is_fish() {
        request.type_constraint = None;
    }
    request.target = Some(target);
    effects.extend(availability::resolve(request, ctx));
    effects
}

fn identified_message(format: &str, input: &str, target: &Gatherable) -> String {
    let vars = HashMap::from([
        ("Id", target.id().to_string()),
        ("Name", target.name().to_string()),
        ("Input", input.to_string()),
    ]);
    interpolate(format, &vars)
}

#[cfg(test)]
#[path = "identify_tests.rs"]
mod tests;
