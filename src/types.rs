//! Core types for the packing list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an item.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a snapshot in the list's history.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Version(pub u64);

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({})", self.0)
    }
}

impl Version {
    pub fn next(self) -> Self {
        Version(self.0 + 1)
    }
}

/// One packing-list entry.
///
/// Items are never edited in place. Toggling produces a replacement with
/// the same id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (caller- or generator-assigned).
    pub id: ItemId,

    /// What to pack.
    pub description: String,

    /// How many, at least 1.
    pub quantity: u32,

    /// Whether it is already in the bag.
    #[serde(default)]
    pub packed: bool,
}

impl Item {
    /// Create a new, unpacked item.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Builder-style packed flag, mostly for seed data.
    pub fn with_packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }

    /// Copy of this item with `packed` inverted.
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

/// Input for creating a new item (before an id is assigned).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemInput {
    pub description: String,
    pub quantity: u32,
}

impl ItemInput {
    pub fn new(description: impl Into<String>, quantity: u32) -> Self {
        Self {
            description: description.into(),
            quantity,
        }
    }

    /// Turn this input into an unpacked item with the given id.
    pub fn into_item(self, id: ItemId) -> Item {
        Item::new(id, self.description, self.quantity)
    }
}
