//! The immutable 5x5 world.
//!
//! A `Board` holds the terrain matrix, the base cell, and the resource
//! placements with an O(1) position index. It is never mutated after
//! construction, so one board can back any number of search invocations.

use std::collections::HashMap;

use serde::Serialize;

use super::coord::{Coord, GRID_SIZE};
use super::terrain::{ResourceKind, Terrain, KIND_COUNT};

const SIZE: usize = GRID_SIZE as usize;

/// Default per-kind delivery requirement: 3 stone, 2 iron, 1 crystal.
pub const DEFAULT_REQUIRED: [u8; KIND_COUNT] = [3, 2, 1];

/// Default backpack capacity.
pub const DEFAULT_CAPACITY: u8 = 2;

/// Errors that can occur during board construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("terrain grid must be {GRID_SIZE}x{GRID_SIZE}, got {0} rows")]
    WrongRowCount(usize),

    #[error("terrain grid must be {GRID_SIZE}x{GRID_SIZE}, row {row} has {cols} columns")]
    WrongColCount { row: usize, cols: usize },

    #[error("invalid terrain token at ({row}, {col}): '{token}'")]
    InvalidTerrain { row: usize, col: usize, token: String },

    #[error("invalid resource kind at ({row}, {col}): '{token}'")]
    InvalidResourceKind { row: i8, col: i8, token: String },

    #[error("resource placed out of bounds at ({row}, {col})")]
    ResourceOutOfBounds { row: i8, col: i8 },

    #[error("duplicate resource at ({row}, {col})")]
    DuplicateResource { row: i8, col: i8 },
}

/// One resource placed on the board.
///
/// `id` is unique in `[0, N)`, assigned in list order at construction time,
/// and used as a bit position in consumption masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resource {
    pub pos: Coord,
    pub kind: ResourceKind,
    pub id: u8,
}

/// The 5x5 terrain/resource map plus mission parameters.
#[derive(Debug, Clone)]
pub struct Board {
    terrain: [[Terrain; SIZE]; SIZE],
    base: Coord,
    resources: Vec<Resource>,
    index: HashMap<Coord, u8>,
    required: [u8; KIND_COUNT],
    capacity: u8,
}

impl Board {
    /// Builds a board from an already-typed terrain matrix and resource list.
    ///
    /// Resource ids are assigned sequentially in list order. Fails on the
    /// first out-of-bounds or duplicate placement.
    pub fn new(
        terrain: [[Terrain; SIZE]; SIZE],
        resources: &[(Coord, ResourceKind)],
    ) -> Result<Board, BoardError> {
        let mut list = Vec::with_capacity(resources.len());
        let mut index = HashMap::with_capacity(resources.len());
        for (i, &(pos, kind)) in resources.iter().enumerate() {
            if !pos.in_bounds() {
                return Err(BoardError::ResourceOutOfBounds {
                    row: pos.row,
                    col: pos.col,
                });
            }
            if index.insert(pos, i as u8).is_some() {
                return Err(BoardError::DuplicateResource {
                    row: pos.row,
                    col: pos.col,
                });
            }
            list.push(Resource {
                pos,
                kind,
                id: i as u8,
            });
        }

        Ok(Board {
            terrain,
            base: Coord::new(0, 0),
            resources: list,
            index,
            required: DEFAULT_REQUIRED,
            capacity: DEFAULT_CAPACITY,
        })
    }

    /// Builds a board from uppercase layout tokens.
    ///
    /// The terrain matrix must be exactly 5x5 and every token must name a
    /// known terrain or resource kind; the first offending cell or entry is
    /// reported.
    pub fn from_tokens(
        terrain: &[Vec<&str>],
        resources: &[(Coord, &str)],
    ) -> Result<Board, BoardError> {
        if terrain.len() != SIZE {
            return Err(BoardError::WrongRowCount(terrain.len()));
        }
        let mut matrix = [[Terrain::Grass; SIZE]; SIZE];
        for (r, row) in terrain.iter().enumerate() {
            if row.len() != SIZE {
                return Err(BoardError::WrongColCount {
                    row: r,
                    cols: row.len(),
                });
            }
            for (c, token) in row.iter().enumerate() {
                matrix[r][c] = Terrain::from_token(token).ok_or_else(|| {
                    BoardError::InvalidTerrain {
                        row: r,
                        col: c,
                        token: token.to_string(),
                    }
                })?;
            }
        }

        let mut typed = Vec::with_capacity(resources.len());
        for &(pos, token) in resources {
            let kind = ResourceKind::from_token(token).ok_or_else(|| {
                BoardError::InvalidResourceKind {
                    row: pos.row,
                    col: pos.col,
                    token: token.to_string(),
                }
            })?;
            typed.push((pos, kind));
        }

        Board::new(matrix, &typed)
    }

    /// Overrides the per-kind delivery requirement (defaults 3/2/1).
    pub fn with_required(mut self, required: [u8; KIND_COUNT]) -> Board {
        self.required = required;
        self
    }

    /// Overrides the backpack capacity (default 2).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-capacity backpack makes every
    /// collecting mission unsolvable.
    pub fn with_capacity(mut self, capacity: u8) -> Board {
        assert!(capacity > 0, "backpack capacity must be positive");
        self.capacity = capacity;
        self
    }

    /// Returns true if the coordinate is inside the 5x5 board.
    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.in_bounds()
    }

    /// Cost to enter `pos`, derived from the destination cell's terrain.
    ///
    /// Callers must pass an in-bounds coordinate.
    pub fn enter_cost(&self, pos: Coord) -> u32 {
        self.terrain[pos.row as usize][pos.col as usize].enter_cost()
    }

    /// Returns the resource at `pos`, if any.
    pub fn resource_at(&self, pos: Coord) -> Option<&Resource> {
        self.index.get(&pos).map(|&i| &self.resources[i as usize])
    }

    /// Minimal per-step cost on any board; the heuristics' optimism factor.
    pub fn cheapest_terrain_cost(&self) -> u32 {
        Terrain::cheapest_cost()
    }

    /// All resource placements, in id order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Total number of resources placed on the board.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// The single-agent home base, fixed at (0,0).
    pub fn base(&self) -> Coord {
        self.base
    }

    /// Per-kind delivery requirement.
    pub fn required(&self) -> [u8; KIND_COUNT] {
        self.required
    }

    /// Required delivery count for one kind.
    pub fn required_of(&self, kind: ResourceKind) -> u8 {
        self.required[kind.index()]
    }

    /// Backpack capacity.
    pub fn capacity(&self) -> u8 {
        self.capacity
    }
}
