// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake adapter bundle for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::chat::FakeChatAdapter;
use crate::command::FakeCommandAdapter;
use crate::host::Adapters;
use crate::map::FakeMapAdapter;
use crate::sequence::FakeSequenceAdapter;
use crate::teleport::FakeTeleportAdapter;

/// All host fakes; clones share recorded calls
#[derive(Clone, Default)]
pub struct FakeAdapters {
    pub chat: FakeChatAdapter,
    pub commands: FakeCommandAdapter,
    pub teleport: FakeTeleportAdapter,
    pub map: FakeMapAdapter,
    pub sequence: FakeSequenceAdapter,
}

impl FakeAdapters {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Adapters for FakeAdapters {
    type Chat = FakeChatAdapter;
    type Commands = FakeCommandAdapter;
    type Teleport = FakeTeleportAdapter;
    type Map = FakeMapAdapter;
    type Sequence = FakeSequenceAdapter;

    fn chat(&self) -> Self::Chat {
        self.chat.clone()
    }

    fn commands(&self) -> Self::Commands {
        self.commands.clone()
    }

    fn teleport(&self) -> Self::Teleport {
        self.teleport.clone()
    }

    fn map(&self) -> Self::Map {
        self.map.clone()
    }

    fn sequence(&self) -> Self::Sequence {
        self.sequence.clone()
    }
}
