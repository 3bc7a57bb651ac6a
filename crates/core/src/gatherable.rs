// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gatherable items and fish

use serde::{Deserialize, Serialize};

/// Game item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item gathered from mining or botany nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
        }
    }
}

/// A fish caught with a rod or spear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub spearfishing: bool,
}

impl Fish {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            spearfishing: false,
        }
    }
}

/// Anything a gather request can target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gatherable {
    Item(Item),
    Fish(Fish),
}

impl Gatherable {
    pub fn id(&self) -> ItemId {
        match self {
            Gatherable::Item(item) => item.id,
            Gatherable::Fish(fish) => fish.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Gatherable::Item(item) => &item.name,
            Gatherable::Fish(fish) => &fish.name,
        }
    }

    pub fn is_fish(&self) -> bool {
        matches!(self, Gatherable::Fish(_))
    }
}

impl From<Item> for Gatherable {
    fn from(item: Item) -> Self {
        Gatherable::Item(item)
    }
}

impl From<Fish> for Gatherable {
    fn from(fish: Fish) -> Self {
        Gatherable::Fish(fish)
    }
}
