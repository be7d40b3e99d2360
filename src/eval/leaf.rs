//! Weighted leaf evaluation for the adversarial search.
//!
//! Scores a non-terminal position from A's perspective (positive favors A,
//! negative favors B). Not admissible and never used by the A* engine;
//! terminal outcomes are scored separately by the alpha-beta agent so the
//! true result always dominates this heuristic noise.

use crate::board::{Board, Coord};
use crate::state::{GameState, Player, A_BASE, B_BASE};

/// Weight on (delivered + carried), A minus B. The dominant term.
const POSSESSION_W: i32 = 220;

/// Reward ceiling for standing near an uncollected resource.
const NEAR_RES_BONUS: i32 = 60;

/// Pull toward the own base while carrying anything. Scaled to beat the
/// proximity term as soon as the bag is non-empty.
const RETURN_BASE_BONUS: i32 = 260;

/// Per-step scale on the base pull distance.
const RETURN_STEP_SCALE: i32 = 10;

/// Flat per-evaluation charge; discourages non-productive wandering.
const STEP_TAX: i32 = 3;

/// Cost-weighted distance from `pos` to the nearest uncollected resource,
/// or `None` once the board is bare.
fn nearest_uncollected_dist(board: &Board, state: &GameState, pos: Coord) -> Option<i32> {
    let min_cost = board.cheapest_terrain_cost() as i32;
    let mut best: Option<i32> = None;
    for res in board.resources() {
        if state.is_collected(res.id) {
            continue;
        }
        let d = pos.manhattan(res.pos) as i32 * min_cost;
        best = Some(match best {
            Some(b) => b.min(d),
            None => d,
        });
    }
    best
}

fn base_pull(board: &Board, player: &Player, home: Coord) -> i32 {
    if player.bag.is_empty() {
        return 0;
    }
    let d = player.pos.manhattan(home) as i32 * board.cheapest_terrain_cost() as i32;
    (RETURN_BASE_BONUS - d * RETURN_STEP_SCALE).max(0)
}

/// Evaluates a two-agent position, A-positive.
pub fn evaluate(board: &Board, state: &GameState) -> i32 {
    let a = &state.a;
    let b = &state.b;

    // Possession: banked plus carried, heavily weighted.
    let mut val = (a.delivered_total as i32 + a.bag.total() as i32
        - b.delivered_total as i32
        - b.bag.total() as i32)
        * POSSESSION_W;

    // Proximity to whatever is still on the board, symmetric in sign.
    if let Some(d) = nearest_uncollected_dist(board, state, a.pos) {
        val += (NEAR_RES_BONUS - d).max(0);
    }
    if let Some(d) = nearest_uncollected_dist(board, state, b.pos) {
        val -= (NEAR_RES_BONUS - d).max(0);
    }

    // Carrying players are pushed home.
    val += base_pull(board, a, A_BASE);
    val -= base_pull(board, b, B_BASE);

    val - STEP_TAX
}
