// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by the engine's unit tests
//!
//! The territory uses a size factor of 100, so a world coordinate `c`
//! lands on map coordinate `2c + 2148`. The node sits 150 map units east
//! of the world origin and its aetheryte 100 units south of the node.

use crate::context::StageContext;
use chrono::{DateTime, TimeZone, Utc};
use gb_adapters::{Availability, FakeGameState, FakeIdentificator, FakeUptimeRanker, MapDistance};
use gb_core::{
    Aetheryte, AetheryteId, Config, Fish, GatheringType, Item, Location, TerritoryId, Territory,
    TimeWindow,
};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub const THANALAN: TerritoryId = TerritoryId(140);
pub const HORIZON: AetheryteId = AetheryteId(17);

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

pub fn horizon() -> Aetheryte {
    Aetheryte {
        id: HORIZON,
        name: "Horizon".to_string(),
        territory: THANALAN,
        x_coord: 2298,
        y_coord: 2248,
    }
}

pub fn thanalan() -> Arc<Territory> {
    Arc::new(Territory {
        id: THANALAN,
        name: "Western Thanalan".to_string(),
        size_factor: 100,
        aetherytes: vec![horizon()],
    })
}

pub fn salt_node() -> Location {
    Location {
        id: 154,
        name: "Cape Westwind".to_string(),
        territory: thanalan(),
        integral_x: 2298,
        integral_y: 2148,
        closest_aetheryte: Some(horizon()),
        gathering_type: GatheringType::Mining,
        schedule: None,
    }
}

pub fn rock_salt() -> Item {
    Item::new(5518, "Rock Salt")
}

pub fn goby() -> Fish {
    Fish::new(4869, "Merlthor Goby")
}

pub fn available(location: Location, window: TimeWindow) -> Availability {
    Availability { location, window }
}

/// Owns everything a [`StageContext`] borrows
pub struct Harness {
    pub config: Config,
    pub now: DateTime<Utc>,
    pub identificator: FakeIdentificator,
    pub uptime: FakeUptimeRanker,
    pub game: FakeGameState,
    pub distance: MapDistance,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            now: now(),
            identificator: FakeIdentificator::new(),
            uptime: FakeUptimeRanker::new(),
            game: FakeGameState::new(),
            distance: MapDistance,
        }
    }

    pub fn ctx(&self) -> StageContext<'_> {
        StageContext {
            config: &self.config,
            now: self.now,
            identificator: &self.identificator,
            uptime: &self.uptime,
            game: &self.game,
            distance: &self.distance,
        }
    }
}

#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a closure with tracing output captured as plain text
pub fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let output = String::from_utf8_lossy(&logs.logs.lock().unwrap()).to_string();
    (output, result)
}
