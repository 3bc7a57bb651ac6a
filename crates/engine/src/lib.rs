// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Gather request engine
//!
//! Registration builds a fresh [`GatherRequest`] and starts the host's
//! action sequence. The sequence then dispatches stage tokens, and each
//! stage turns the request into [`Effect`](gb_core::Effect)s that the
//! [`Executor`] carries out through the host adapters.

pub mod availability;
mod context;
mod error;
mod executor;
mod gatherer;
mod request;
pub mod stages;

#[cfg(test)]
mod test_support;

pub use context::StageContext;
pub use error::ExecuteError;
pub use executor::Executor;
pub use gatherer::Gatherer;
pub use request::{GatherRequest, IdentifyKind};
pub use stages::{
    dispatch, teleport_to_aetheryte, teleport_to_territory, Stage, StageHandler, STAGES,
    TELEPORT_LEEWAY,
};
