//! Entity identifiers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque handle identifying one slot in a store.
///
/// An entity is nothing more than an index in `[0, capacity)`. It carries no
/// data itself; component values live in per-type arrays addressed by this
/// index, so slot `i` refers to the same entity in every array.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    index: u32,
}

impl Entity {
    /// Creates an entity handle for the given index.
    ///
    /// Handles are normally obtained from a store's allocator; constructing
    /// one directly is only useful in tests and tooling.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self { index }
    }

    /// Returns the index as a `usize` for slot addressing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.index)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.index)
    }
}
