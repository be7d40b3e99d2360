//! Node scoring for both engines.
//!
//! The admissible lower-bound estimators guide the single-agent A*;
//! the weighted leaf evaluation ranks non-terminal positions in the
//! adversarial search and makes no admissibility promise.

pub mod admissible;
pub mod leaf;

pub use admissible::Heuristic;
pub use leaf::evaluate;
