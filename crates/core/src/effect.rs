// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects requested by gather stages

use crate::message::Message;
use crate::traced::TracedEffect;
use crate::world::{AetheryteId, MapLink};

/// Side effects that registration and stages ask the host to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show a chat message
    Print(Message),
    /// Run a text command in the host, e.g. `/gearset change "Miner"`
    ExecuteCommand { command: String },
    /// Teleport to an aetheryte, letting the host validate it
    Teleport { aetheryte: AetheryteId },
    /// Teleport to an aetheryte already known to be attuned
    TeleportUnchecked { aetheryte: AetheryteId },
    /// Place the map flag
    SetMapFlag { link: MapLink },
    /// Start the host's staged action sequence
    StartSequence,
}

impl Effect {
    /// The equipment switch command for a named gear set
    pub fn gearset_change(set: &str) -> Self {
        Effect::ExecuteCommand {
            command: format!("/gearset change \"{}\"", set),
        }
    }
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::Print(_) => "print",
            Effect::ExecuteCommand { .. } => "execute_command",
            Effect::Teleport { .. } => "teleport",
            Effect::TeleportUnchecked { .. } => "teleport_unchecked",
            Effect::SetMapFlag { .. } => "set_map_flag",
            Effect::StartSequence => "start_sequence",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Print(message) => vec![
                ("kind", format!("{:?}", message.kind)),
                ("text", message.to_string()),
            ],
            Effect::ExecuteCommand { command } => vec![("command", command.clone())],
            Effect::Teleport { aetheryte } | Effect::TeleportUnchecked { aetheryte } => {
                vec![("aetheryte", aetheryte.to_string())]
            }
            Effect::SetMapFlag { link } => vec![
                ("territory", link.territory.to_string()),
                ("x", format!("{:.2}", link.x)),
                ("y", format!("{:.2}", link.y)),
            ],
            Effect::StartSequence => vec![],
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
