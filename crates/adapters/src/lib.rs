// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the host game and its collaborators
//!
//! Side effects (chat, commands, teleports, map flags, the action
//! sequence) are driven by the effect executor. Queries (name
//! resolution, uptime ranking, game state, distances) are read by the
//! gather stages.

pub mod chat;
pub mod command;
pub mod game;
pub mod host;
pub mod identify;
pub mod map;
pub mod sequence;
pub mod teleport;
pub mod traced;
pub mod uptime;

pub use chat::{ChatAdapter, ChatError, LogChatAdapter};
pub use command::{CommandAdapter, CommandError, NoOpCommandAdapter};
pub use game::{DistanceMetric, GameState, MapDistance, OfflineGameState};
pub use host::{Adapters, HostAdapters};
pub use identify::{Identificator, NoOpIdentificator};
pub use map::{MapAdapter, MapError, NoOpMapAdapter};
pub use sequence::{NoOpSequenceAdapter, SequenceAdapter, SequenceError};
pub use teleport::{NoOpTeleportAdapter, TeleportAdapter, TeleportError};
pub use traced::{TracedCommandAdapter, TracedTeleportAdapter};
pub use uptime::{Availability, NoOpUptimeRanker, UptimeRanker};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use chat::FakeChatAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use command::FakeCommandAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAdapters;
#[cfg(any(test, feature = "test-support"))]
pub use game::FakeGameState;
#[cfg(any(test, feature = "test-support"))]
pub use identify::{FakeIdentificator, IdentifyQuery};
#[cfg(any(test, feature = "test-support"))]
pub use map::FakeMapAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use sequence::FakeSequenceAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use teleport::{FakeTeleportAdapter, TeleportCall};
#[cfg(any(test, feature = "test-support"))]
pub use uptime::{FakeUptimeRanker, UptimeQuery};
