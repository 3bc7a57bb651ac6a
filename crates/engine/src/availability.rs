// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Location and uptime lookup for a resolved target

use crate::context::StageContext;
use crate::request::GatherRequest;
use gb_adapters::Availability;
use gb_core::{Effect, Gatherable, Message, TimeWindow};

/// Fill in the request's location and window from the uptime ranker
///
/// Fish and unconstrained items ask for the best location across all job
/// categories; a constrained item asks for its next uptime within that
/// category. Does nothing without a target.
pub fn resolve(request: &mut GatherRequest, ctx: &StageContext<'_>) -> Vec<Effect> {
    let Some(target) = &request.target else {
        return Vec::new();
    };

    let found = match (target, request.type_constraint) {
        (Gatherable::Fish(_), _) | (Gatherable::Item(_), None) => ctx.uptime.best_location(target),
        (Gatherable::Item(item), Some(kind)) => ctx.uptime.next_uptime(item, kind, ctx.now),
    };

    match found {
        Some(Availability { location, window }) => {
            tracing::debug!(
                item = target.name(),
                location = %location.name,
                always = window.is_always(),
                "location resolved"
            );
            request.location = Some(location);
            request.window = window;
            Vec::new()
        }
        None => {
            let mut message = Message::error()
                .text("No associated location found for ")
                .arg(target.name(), ctx.color());
            if let Some(kind) = request.type_constraint {
                message = message
                    .text(" with condition ")
                    .arg(kind.name(), ctx.color());
            }
            tracing::debug!(item = target.name(), "no location found");
            request.location = None;
            request.window = TimeWindow::ALWAYS;
            vec![Effect::Print(message.text("."))]
        }
    }
}

#[cfg(test)]
#[path = "availability_tests.rs"]
mod tests;
