//! Search engines.
//!
//! `astar` finds cost-optimal single-agent plans; `alphabeta` plays the
//! two-agent zero-sum game under a fixed depth; `random` is the baseline
//! opponent.

pub mod alphabeta;
pub mod astar;
pub mod random;

pub use alphabeta::AlphaBetaAgent;
pub use astar::{solve, SolveResult};
pub use random::RandomAgent;
