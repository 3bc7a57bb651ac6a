// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat adapter that writes to the log
//!
//! Used by headless hosts that have no chat window.

use super::{ChatAdapter, ChatError};
use gb_core::{Message, MessageKind};

#[derive(Clone, Copy, Debug, Default)]
pub struct LogChatAdapter;

impl LogChatAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ChatAdapter for LogChatAdapter {
    fn print(&self, message: &Message) -> Result<(), ChatError> {
        match message.kind {
            MessageKind::Info => tracing::info!(target: "chat", "{}", message),
            MessageKind::Error => tracing::warn!(target: "chat", "{}", message),
        }
        Ok(())
    }
}
