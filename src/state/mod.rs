//! State models for the two search problems.
//!
//! Both state families are small `Copy` value types compared and hashed
//! component-wise, so a state doubles as its own canonical table key.

pub mod backpack;
pub mod game;
pub mod search;

pub use backpack::Backpack;
pub use game::{GameState, Player, Turn, A_BASE, B_BASE};
pub use search::SearchState;
