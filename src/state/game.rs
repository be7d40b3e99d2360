//! Two-agent competitive game state.
//!
//! Two players race to collect and deliver the same pool of resources; a
//! pickup flips a bit in the shared collected mask and is therefore
//! mutually exclusive between them. The state is a `Copy` value keyed by
//! component-wise equality, like the single-agent `SearchState`.

use serde::Serialize;

use crate::board::{Board, Coord};

use super::backpack::Backpack;

/// Player A's home base.
pub const A_BASE: Coord = Coord::new(0, 0);

/// Player B's home base, the opposite corner.
pub const B_BASE: Coord = Coord::new(4, 4);

/// Whose move it is. A maximizes, B minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Turn {
    A,
    B,
}

impl Turn {
    /// The other player.
    pub const fn other(self) -> Turn {
        match self {
            Turn::A => Turn::B,
            Turn::B => Turn::A,
        }
    }

    /// This player's home base.
    pub const fn home(self) -> Coord {
        match self {
            Turn::A => A_BASE,
            Turn::B => B_BASE,
        }
    }
}

/// One competitor's record: position, bag, and banked delivery total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    pub pos: Coord,
    pub bag: Backpack,
    pub delivered_total: u8,
}

impl Player {
    fn at(pos: Coord) -> Player {
        Player {
            pos,
            bag: Backpack::empty(),
            delivered_total: 0,
        }
    }
}

/// Complete two-agent game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    pub a: Player,
    pub b: Player,
    /// Bit-set over resource ids picked up by either player.
    pub collected: u32,
    pub turn: Turn,
}

impl GameState {
    /// Initial state: both players at their bases, empty bags, A to move.
    pub fn initial() -> GameState {
        GameState {
            a: Player::at(A_BASE),
            b: Player::at(B_BASE),
            collected: 0,
            turn: Turn::A,
        }
    }

    /// The player whose turn it is.
    pub fn active(&self) -> &Player {
        match self.turn {
            Turn::A => &self.a,
            Turn::B => &self.b,
        }
    }

    /// Combined delivery total of both players.
    pub fn delivered_total(&self) -> u8 {
        self.a.delivered_total + self.b.delivered_total
    }

    /// Terminal exactly when every resource on the board has been delivered.
    pub fn is_terminal(&self, board: &Board) -> bool {
        self.delivered_total() as usize >= board.resource_count()
    }

    /// Zero-sum utility: A's deliveries minus B's.
    pub fn utility(&self) -> i32 {
        self.a.delivered_total as i32 - self.b.delivered_total as i32
    }

    /// Returns true if the resource with this id was picked up by either player.
    pub fn is_collected(&self, id: u8) -> bool {
        self.collected & (1 << id) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ResourceKind, Terrain};

    fn board() -> Board {
        Board::new(
            [[Terrain::Grass; 5]; 5],
            &[
                (Coord::new(0, 1), ResourceKind::Stone),
                (Coord::new(3, 4), ResourceKind::Stone),
            ],
        )
        .unwrap()
    }

    #[test]
    fn initial_state_layout() {
        let s = GameState::initial();
        assert_eq!(s.a.pos, A_BASE);
        assert_eq!(s.b.pos, B_BASE);
        assert_eq!(s.turn, Turn::A);
        assert!(s.a.bag.is_empty());
        assert!(s.b.bag.is_empty());
        assert_eq!(s.collected, 0);
    }

    #[test]
    fn terminal_iff_everything_delivered() {
        let board = board();
        let mut s = GameState::initial();
        assert!(!s.is_terminal(&board));
        s.a.delivered_total = 1;
        assert!(!s.is_terminal(&board));
        s.b.delivered_total = 1;
        assert!(s.is_terminal(&board));
        assert_eq!(s.utility(), 0);
    }

    #[test]
    fn utility_is_zero_sum() {
        let mut s = GameState::initial();
        s.a.delivered_total = 2;
        s.b.delivered_total = 1;
        assert_eq!(s.utility(), 1);
        std::mem::swap(&mut s.a, &mut s.b);
        assert_eq!(s.utility(), -1);
    }

    #[test]
    fn turn_helpers() {
        assert_eq!(Turn::A.other(), Turn::B);
        assert_eq!(Turn::B.other(), Turn::A);
        assert_eq!(Turn::A.home(), A_BASE);
        assert_eq!(Turn::B.home(), B_BASE);
    }
}
