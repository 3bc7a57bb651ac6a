// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake chat adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ChatAdapter, ChatError};
use gb_core::Message;
use std::sync::{Arc, Mutex};

/// Fake chat adapter recording every printed message
#[derive(Clone, Default)]
pub struct FakeChatAdapter {
    messages: Arc<Mutex<Vec<Message>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl FakeChatAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all printed messages
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Printed messages rendered as plain text
    pub fn lines(&self) -> Vec<String> {
        self.messages().iter().map(|m| m.to_string()).collect()
    }

    /// Printed error messages rendered as plain text
    pub fn errors(&self) -> Vec<String> {
        self.messages()
            .iter()
            .filter(|m| m.is_error())
            .map(|m| m.to_string())
            .collect()
    }

    /// Make subsequent prints fail
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.fail_with.lock().unwrap_or_else(|e| e.into_inner()) = Some(reason.into());
    }
}

impl ChatAdapter for FakeChatAdapter {
    fn print(&self, message: &Message) -> Result<(), ChatError> {
        if let Some(reason) = self.fail_with.lock().unwrap_or_else(|e| e.into_inner()).clone() {
            return Err(ChatError::Unavailable(reason));
        }
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
