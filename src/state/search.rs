//! Single-agent search state.
//!
//! The canonical, immutable node explored by the A* engine. All fields are
//! fixed-size, so the state is `Copy` and serves directly as the key for
//! the best-cost, parent-pointer, and repetition tables: two states compare
//! equal iff every field is component-wise equal.

use serde::Serialize;

use crate::board::{Board, Coord, ResourceKind, ALL_KINDS, KIND_COUNT};

use super::backpack::Backpack;

/// One node of the single-agent state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SearchState {
    /// Agent position.
    pub pos: Coord,
    /// Carried resources; total never exceeds the board capacity.
    pub bag: Backpack,
    /// Per-kind counts already banked at the base, each clamped to the
    /// board requirement.
    pub delivered: [u8; KIND_COUNT],
    /// Bit-set over resource ids already picked up along this path.
    pub consumed: u32,
}

impl SearchState {
    /// The start state: at the base, empty bag, nothing delivered, empty mask.
    pub fn start(board: &Board) -> SearchState {
        SearchState {
            pos: board.base(),
            bag: Backpack::empty(),
            delivered: [0; KIND_COUNT],
            consumed: 0,
        }
    }

    /// Goal test: every delivered component equals its requirement exactly.
    pub fn is_goal(&self, board: &Board) -> bool {
        self.delivered == board.required()
    }

    /// Total items carried.
    pub fn total_carried(&self) -> u8 {
        self.bag.total()
    }

    /// Items of one kind carried.
    pub fn count_carried(&self, kind: ResourceKind) -> u8 {
        self.bag.count(kind)
    }

    /// Per-kind counts still owed to delivery, ignoring the bag.
    pub fn remaining_to_deliver(&self, board: &Board) -> [u8; KIND_COUNT] {
        let required = board.required();
        let mut rem = [0; KIND_COUNT];
        for i in 0..KIND_COUNT {
            rem[i] = required[i].saturating_sub(self.delivered[i]);
        }
        rem
    }

    /// Per-kind counts still to be picked up, discounting what is carried.
    pub fn remaining_to_collect(&self, board: &Board) -> [u8; KIND_COUNT] {
        let mut rem = self.remaining_to_deliver(board);
        for k in ALL_KINDS {
            rem[k.index()] = rem[k.index()].saturating_sub(self.bag.count(k));
        }
        rem
    }

    /// Returns true if the resource with this id was already picked up.
    pub fn has_consumed(&self, id: u8) -> bool {
        self.consumed & (1 << id) != 0
    }
}
