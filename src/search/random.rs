//! Uniform random baseline opponent.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Coord;
use crate::movegen::legal_moves;
use crate::state::GameState;

/// Picks uniformly among the active player's legal moves.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new() -> RandomAgent {
        RandomAgent {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic variant for reproducible matches.
    pub fn seeded(seed: u64) -> RandomAgent {
        RandomAgent {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly random legal move, or `None` without one.
    pub fn decide_move(&mut self, state: &GameState) -> Option<Coord> {
        let moves = legal_moves(state);
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..moves.len());
        Some(moves[idx])
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        RandomAgent::new()
    }
}
