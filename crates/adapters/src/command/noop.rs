// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op command adapter for hosts without a command channel.

use super::{CommandAdapter, CommandError};

/// Command adapter that accepts and drops every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpCommandAdapter;

impl NoOpCommandAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CommandAdapter for NoOpCommandAdapter {
    fn execute(&self, _command: &str) -> Result<(), CommandError> {
        Ok(())
    }
}
