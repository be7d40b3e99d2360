//! Board representation.
//!
//! Contains the core data structures for coordinates, terrain, resources,
//! and the immutable 5x5 world the search engines operate on.

pub mod coord;
pub mod grid;
pub mod terrain;

pub use coord::{Coord, GRID_SIZE};
pub use grid::{Board, BoardError, Resource};
pub use terrain::{ResourceKind, Terrain, ALL_KINDS, ALL_TERRAINS, KIND_COUNT};
