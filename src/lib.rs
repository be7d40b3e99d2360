//! Prospector engine library.
//!
//! Exposes the board representation, state models, transition functions,
//! heuristic evaluation, and the two search engines (cost-optimal A* and
//! depth-limited alpha-beta) for use by integration tests and front ends.

pub mod board;
pub mod eval;
pub mod movegen;
pub mod search;
pub mod state;
