//! The agent's backpack.
//!
//! An order-insensitive multiset of resource kinds stored as per-kind
//! counts, so two backpacks holding the same kinds compare equal and hash
//! identically regardless of pickup order. Capacity is a board parameter
//! and is enforced by the transition functions, not here.

use serde::Serialize;

use crate::board::{ResourceKind, ALL_KINDS, KIND_COUNT};

/// A capacity-bounded multiset of carried resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Backpack {
    counts: [u8; KIND_COUNT],
}

impl Backpack {
    /// An empty backpack.
    pub const fn empty() -> Backpack {
        Backpack {
            counts: [0; KIND_COUNT],
        }
    }

    /// Total number of carried items.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Number of carried items of one kind.
    pub fn count(&self, kind: ResourceKind) -> u8 {
        self.counts[kind.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns true if the backpack holds `capacity` or more items.
    pub fn is_full(&self, capacity: u8) -> bool {
        self.total() >= capacity
    }

    /// Adds one item of `kind`. The caller checks capacity first.
    pub fn add(&mut self, kind: ResourceKind) {
        self.counts[kind.index()] += 1;
    }

    /// Empties the backpack, returning the per-kind counts that were carried.
    pub fn take_all(&mut self) -> [u8; KIND_COUNT] {
        std::mem::take(&mut self.counts)
    }

    /// Iterates over the carried kinds with their counts.
    pub fn kinds(&self) -> impl Iterator<Item = (ResourceKind, u8)> + '_ {
        ALL_KINDS
            .iter()
            .map(|&k| (k, self.counts[k.index()]))
            .filter(|&(_, n)| n > 0)
    }
}
