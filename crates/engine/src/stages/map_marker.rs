// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Map marker stage

use crate::context::StageContext;
use crate::request::GatherRequest;
use gb_core::{Effect, Message};

pub(crate) fn run(request: &mut GatherRequest, ctx: &StageContext<'_>) -> Vec<Effect> {
    let config = ctx.config;
    if !config.write_coordinates && !config.use_coordinates {
        return Vec::new();
    }
    let Some(location) = &request.location else {
        return Vec::new();
    };
    if !location.has_coordinates() {
        tracing::debug!(location = %location.name, "location has no coordinates");
        return Vec::new();
    }

    let link = location.map_link();
    let mut effects = Vec::new();
    if config.use_coordinates {
        effects.push(Effect::SetMapFlag { link: link.clone() });
    }
    if config.write_coordinates {
        effects.push(Effect::Print(Message::info().link(link)));
    }
    effects
}

#[cfg(test)]
#[path = "map_marker_tests.rs"]
mod tests;
