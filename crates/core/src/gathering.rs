// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gathering job categories

use serde::{Deserialize, Serialize};

/// The gathering discipline a location or search is tied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatheringType {
    Mining,
    Quarrying,
    Logging,
    Harvesting,
    Spearfishing,
    Botanist,
    Miner,
    Fisher,
    Multiple,
    Unknown,
}

impl GatheringType {
    /// Collapse node sub-types into the job that gathers them
    pub fn to_group(self) -> GatheringType {
        match self {
            GatheringType::Mining | GatheringType::Quarrying | GatheringType::Miner => {
                GatheringType::Miner
            }
            GatheringType::Logging | GatheringType::Harvesting | GatheringType::Botanist => {
                GatheringType::Botanist
            }
            GatheringType::Spearfishing | GatheringType::Fisher => GatheringType::Fisher,
            GatheringType::Multiple => GatheringType::Multiple,
            GatheringType::Unknown => GatheringType::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GatheringType::Mining => "Mining",
            GatheringType::Quarrying => "Quarrying",
            GatheringType::Logging => "Logging",
            GatheringType::Harvesting => "Harvesting",
            GatheringType::Spearfishing => "Spearfishing",
            GatheringType::Botanist => "Botanist",
            GatheringType::Miner => "Miner",
            GatheringType::Fisher => "Fisher",
            GatheringType::Multiple => "Multiple",
            GatheringType::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for GatheringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
