//! Grid coordinates and 4-directional adjacency.

use serde::Serialize;

/// Side length of the square board.
pub const GRID_SIZE: i8 = 5;

/// The four cardinal step offsets: north, south, west, east.
const STEPS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell position as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// Returns true if this coordinate lies inside the board.
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < GRID_SIZE && self.col >= 0 && self.col < GRID_SIZE
    }

    /// Manhattan distance to another coordinate.
    pub const fn manhattan(self, other: Coord) -> u32 {
        (self.row - other.row).unsigned_abs() as u32
            + (self.col - other.col).unsigned_abs() as u32
    }

    /// Returns true if `other` is exactly one cardinal step away.
    pub const fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// Iterates over the in-bounds 4-neighbors, in north/south/west/east order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        STEPS
            .iter()
            .map(move |&(dr, dc)| Coord::new(self.row + dr, self.col + dc))
            .filter(|c| c.in_bounds())
    }
}
