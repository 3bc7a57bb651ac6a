// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat messages shown to the player
//!
//! Messages are kept structured so the host can render highlighted
//! arguments and map links natively; [`Display`](std::fmt::Display) gives
//! the plain-text rendering.

use crate::world::MapLink;
use serde::{Deserialize, Serialize};

/// Host UI color used to highlight message arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u16);

impl Default for Color {
    fn default() -> Self {
        Color(500)
    }
}

/// Whether a message reports a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// One piece of a chat message
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Text(String),
    Argument { text: String, color: Color },
    Link(MapLink),
}

/// A chat line
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub segments: Vec<Segment>,
}

impl Message {
    pub fn info() -> Self {
        Self {
            kind: MessageKind::Info,
            segments: Vec::new(),
        }
    }

    pub fn error() -> Self {
        Self {
            kind: MessageKind::Error,
            segments: Vec::new(),
        }
    }

    /// Append plain text; empty text is skipped
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment::Text(text));
        }
        self
    }

    /// Append a highlighted argument
    pub fn arg(mut self, text: impl Into<String>, color: Color) -> Self {
        self.segments.push(Segment::Argument {
            text: text.into(),
            color,
        });
        self
    }

    pub fn link(mut self, link: MapLink) -> Self {
        self.segments.push(Segment::Link(link));
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }

    /// Highlighted arguments in order
    pub fn arguments(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Argument { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => f.write_str(text)?,
                Segment::Argument { text, .. } => f.write_str(text)?,
                Segment::Link(link) => write!(f, "{}", link)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
