// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake command adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CommandAdapter, CommandError};
use std::sync::{Arc, Mutex};

/// Fake command adapter recording every command
#[derive(Clone, Default)]
pub struct FakeCommandAdapter {
    commands: Arc<Mutex<Vec<String>>>,
    reject: Arc<Mutex<Option<String>>>,
}

impl FakeCommandAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all executed commands
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Reject subsequent commands with the given reason
    pub fn reject_with(&self, reason: impl Into<String>) {
        *self.reject.lock().unwrap_or_else(|e| e.into_inner()) = Some(reason.into());
    }
}

impl CommandAdapter for FakeCommandAdapter {
    fn execute(&self, command: &str) -> Result<(), CommandError> {
        self.commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(command.to_string());

        match self.reject.lock().unwrap_or_else(|e| e.into_inner()).clone() {
            Some(reason) => Err(CommandError::Rejected(reason)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
