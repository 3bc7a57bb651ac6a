// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only inputs shared by registration and the stages

use chrono::{DateTime, Utc};
use gb_adapters::{DistanceMetric, GameState, Identificator, UptimeRanker};
use gb_core::{Color, Config};

/// Snapshot taken once per registration or dispatch
#[derive(Clone, Copy)]
pub struct StageContext<'a> {
    pub config: &'a Config,
    pub now: DateTime<Utc>,
    pub identificator: &'a dyn Identificator,
    pub uptime: &'a dyn UptimeRanker,
    pub game: &'a dyn GameState,
    pub distance: &'a dyn DistanceMetric,
}

impl StageContext<'_> {
    /// Highlight color for message arguments
    pub fn color(&self) -> Color {
        self.config.argument_color
    }
}
