// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error types

use gb_adapters::{ChatError, CommandError, MapError, SequenceError, TeleportError};
use thiserror::Error;

/// Errors that can occur during effect execution
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Teleport(#[from] TeleportError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
