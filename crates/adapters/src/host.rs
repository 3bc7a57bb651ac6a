// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bundles of host side-effect adapters

use crate::chat::ChatAdapter;
use crate::command::CommandAdapter;
use crate::map::MapAdapter;
use crate::sequence::SequenceAdapter;
use crate::teleport::TeleportAdapter;

/// Adapters that the effect executor drives
pub trait Adapters: Clone + Send + Sync + 'static {
    type Chat: ChatAdapter;
    type Commands: CommandAdapter;
    type Teleport: TeleportAdapter;
    type Map: MapAdapter;
    type Sequence: SequenceAdapter;

    fn chat(&self) -> Self::Chat;
    fn commands(&self) -> Self::Commands;
    fn teleport(&self) -> Self::Teleport;
    fn map(&self) -> Self::Map;
    fn sequence(&self) -> Self::Sequence;
}

/// Adapter bundle assembled from individual host adapters
#[derive(Clone)]
pub struct HostAdapters<Ch, Co, T, M, S> {
    pub chat: Ch,
    pub commands: Co,
    pub teleport: T,
    pub map: M,
    pub sequence: S,
}

impl<Ch, Co, T, M, S> Adapters for HostAdapters<Ch, Co, T, M, S>
where
    Ch: ChatAdapter,
    Co: CommandAdapter,
    T: TeleportAdapter,
    M: MapAdapter,
    S: SequenceAdapter,
{
    type Chat = Ch;
    type Commands = Co;
    type Teleport = T;
    type Map = M;
    type Sequence = S;

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
