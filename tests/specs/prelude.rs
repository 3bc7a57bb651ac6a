//! Shared fixtures for the gather specs

#![allow(dead_code)]

pub use gb_adapters::{
    FakeAdapters, FakeGameState, FakeIdentificator, FakeUptimeRanker, IdentifyQuery,
    TeleportCall, UptimeQuery,
};
pub use gb_core::{
    Aetheryte, AetheryteId, Config, FakeClock, Fish, Gatherable, GatheringType, Item, ItemId,
    Location, Position, Territory, TerritoryId, TimeWindow,
};
pub use gb_engine::{GatherRequest, Gatherer, IdentifyKind};

use chrono::{DateTime, TimeZone, Utc};
use gb_adapters::Availability;
use std::sync::Arc;

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

/// Rock Salt node at map (22.98, 21.48)
pub fn cape_westwind() -> Location {
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

/// A gatherer wired to fakes, with the handles to inspect them
pub struct World {
    pub gatherer: Gatherer<FakeAdapters, FakeClock>,
    pub host: FakeAdapters,
    pub clock: FakeClock,
    pub identificator: FakeIdentificator,
    pub uptime: FakeUptimeRanker,
    pub game: FakeGameState,
}

impl World {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Rock Salt and the goby are known and both found at Cape Westwind
    pub fn with_config(config: Config) -> Self {
        let host = FakeAdapters::new();
        let clock = FakeClock::at(now());
        let identificator = FakeIdentificator::new()
            .with("Rock Salt", rock_salt())
            .with("Merlthor Goby", goby());
        let availability = Availability {
            location: cape_westwind(),
            window: TimeWindow::ALWAYS,
        };
        let uptime = FakeUptimeRanker::new()
            .with_best(rock_salt().id, availability.clone())
            .with_next(rock_salt().id, GatheringType::Miner, availability.clone())
            .with_best(goby().id, availability);
        let game = FakeGameState::new();

        let gatherer = Gatherer::new(host.clone(), clock.clone(), config)
            .with_identificator(identificator.clone())
            .with_uptime(uptime.clone())
            .with_game(game.clone());

        Self {
            gatherer,
            host,
            clock,
            identificator,
            uptime,
            game,
        }
    }

    /// Plain-text chat lines seen by the player
    pub fn chat(&self) -> Vec<String> {
        self.host.chat.lines()
    }

    pub fn run(&mut self, tokens: &[&str]) {
        for token in tokens {
            assert!(self.gatherer.dispatch(token), "token {token} not handled");
        }
    }
}
