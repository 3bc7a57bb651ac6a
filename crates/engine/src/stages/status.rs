// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Additional info stage: report the availability window

use crate::context::StageContext;
use crate::request::GatherRequest;
use gb_core::{format_duration, Effect, Message};

pub(crate) fn run(request: &mut GatherRequest, ctx: &StageContext<'_>) -> Vec<Effect> {
    let window = request.window;
    if !ctx.config.print_uptime || window.is_always() {
        return Vec::new();
    }

    let message = if window.is_before(ctx.now) {
        Message::info()
            .text("Next up in ")
            .arg(format_duration(window.until_start(ctx.now)), ctx.color())
    } else {
        // An elapsed window reports zero time left
        Message::info()
            .text("Currently up for the next ")
            .arg(format_duration(window.until_end(ctx.now)), ctx.color())
    };
    vec![Effect::Print(message.text("."))]
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
