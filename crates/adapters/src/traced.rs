// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::command::{CommandAdapter, CommandError};
use crate::teleport::{TeleportAdapter, TeleportError};
use gb_core::AetheryteId;

/// Wrapper that adds tracing to any CommandAdapter
#[derive(Clone)]
pub struct TracedCommandAdapter<C> {
    inner: C,
}

impl<C> TracedCommandAdapter<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: CommandAdapter> CommandAdapter for TracedCommandAdapter<C> {
    fn execute(&self, command: &str) -> Result<(), CommandError> {
        let span = tracing::info_span!("command.execute", command);
        let _guard = span.enter();

        // Precondition: host commands are slash commands
        if !command.starts_with('/') {
            tracing::error!("not a slash command");
            return Err(CommandError::Rejected(format!(
                "not a slash command: {}",
                command
            )));
        }

        let result = self.inner.execute(command);
        match &result {
            Ok(()) => tracing::info!("executed"),
            Err(e) => tracing::error!(error = %e, "execute failed"),
        }

        result
    }
}

/// Wrapper that adds tracing to any TeleportAdapter
#[derive(Clone)]
pub struct TracedTeleportAdapter<T> {
    inner: T,
}

impl<T> TracedTeleportAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: TeleportAdapter> TeleportAdapter for TracedTeleportAdapter<T> {
    fn teleport(&self, aetheryte: AetheryteId) -> Result<(), TeleportError> {
        let span = tracing::info_span!("teleport", aetheryte = aetheryte.0);
        let _guard = span.enter();

        // Precondition: id 0 is never a destination
        if !aetheryte.is_valid() {
            tracing::error!("invalid aetheryte");
            return Err(TeleportError::InvalidAetheryte(aetheryte));
        }

        let result = self.inner.teleport(aetheryte);
        match &result {
            Ok(()) => tracing::info!("teleporting"),
            Err(e) => tracing::warn!(error = %e, "teleport refused"),
        }

        result
    }

    fn teleport_unchecked(&self, aetheryte: AetheryteId) -> Result<(), TeleportError> {
        let span = tracing::info_span!("teleport.unchecked", aetheryte = aetheryte.0);
        let _guard = span.enter();

        if !aetheryte.is_valid() {
            tracing::error!("invalid aetheryte");
            return Err(TeleportError::InvalidAetheryte(aetheryte));
        }

        let result = self.inner.teleport_unchecked(aetheryte);
        match &result {
            Ok(()) => tracing::info!("teleporting"),
            Err(e) => tracing::error!(error = %e, "teleport failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
