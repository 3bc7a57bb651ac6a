// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gb-core: Core types for gather requests
//!
//! This crate provides:
//! - Availability windows and Eorzea-hour node schedules
//! - Gatherables, job categories and the world model
//! - Configuration, chat messages and message templates
//! - Effects requested by the gather stages

pub mod clock;
pub mod config;
pub mod effect;
pub mod eorzea;
pub mod gatherable;
pub mod gathering;
pub mod message;
pub mod template;
pub mod traced;
pub mod window;
pub mod world;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{Config, ConfigError, DEFAULT_IDENTIFIED_FORMAT};
pub use effect::Effect;
pub use eorzea::UptimeSchedule;
pub use gatherable::{Fish, Gatherable, Item, ItemId};
pub use gathering::GatheringType;
pub use message::{Color, Message, MessageKind, Segment};
pub use template::interpolate;
pub use traced::TracedEffect;
pub use window::{format_duration, TimeWindow, WindowError};
pub use world::{
    world_to_map, Aetheryte, AetheryteId, Location, MapLink, Position, Territory, TerritoryId,
    UNSET_COORDINATE,
};
