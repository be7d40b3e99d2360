//! Depth-limited minimax with alpha-beta pruning.
//!
//! A maximizes, B minimizes. Candidates come from the bag-full policy in
//! `movegen` and are ordered before expansion to improve pruning. Repeated
//! positions are damped by a counter table scoped to one `decide_move`
//! call and shared across all branches of that decision, so cycling is
//! penalized tree-wide rather than per path.

use std::collections::HashMap;

use crate::board::{Board, Coord};
use crate::eval::evaluate;
use crate::movegen::{apply_move, candidate_moves};
use crate::state::{GameState, Turn};

const INF: i32 = 1_000_000_000;

/// Scales the true terminal outcome so it dominates heuristic leaf noise.
const TERMINAL_BOOST: i32 = 1_000_000;

/// Charge per extra visit of an already-seen position.
const LOOP_PENALTY: i32 = 150;

/// Ordering distance used when no uncollected resource remains.
const FALLBACK_DIST: u32 = 999;

/// Fixed-depth adversarial searcher.
#[derive(Debug, Clone)]
pub struct AlphaBetaAgent {
    depth: u32,
}

impl AlphaBetaAgent {
    /// Creates an agent searching `depth` plies.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero; a zero-ply search could never look at a
    /// single move.
    pub fn new(depth: u32) -> AlphaBetaAgent {
        assert!(depth > 0, "search depth must be positive");
        AlphaBetaAgent { depth }
    }

    /// Picks a move for the active player, or `None` when no candidate
    /// exists (the caller treats that as a forced pass).
    ///
    /// Ties at the root are broken toward the mover's base, but only while
    /// the mover's bag is at capacity; otherwise the first best-valued
    /// candidate is kept.
    pub fn decide_move(&self, board: &Board, state: &GameState) -> Option<Coord> {
        let mut seen: HashMap<GameState, u32> = HashMap::new();

        let is_max = state.turn == Turn::A;
        let mut alpha = -INF;
        let mut beta = INF;
        let mut best_val = if is_max { -INF } else { INF };
        let mut best_move: Option<Coord> = None;

        let home = state.turn.home();
        let bag_full = state.active().bag.is_full(board.capacity());

        for mv in ordered_candidates(board, state) {
            let next = apply_move(board, state, mv);
            let val = alphabeta(board, &next, self.depth - 1, alpha, beta, &mut seen);

            if is_better(val, best_val, is_max) {
                best_val = val;
                best_move = Some(mv);
            } else if val == best_val && bag_full && closer_to(mv, best_move, home) {
                best_move = Some(mv);
            }

            if is_max {
                alpha = alpha.max(val);
            } else {
                beta = beta.min(val);
            }
            if beta <= alpha {
                break;
            }
        }

        best_move
    }
}

fn alphabeta(
    board: &Board,
    state: &GameState,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    seen: &mut HashMap<GameState, u32>,
) -> i32 {
    let repeats = {
        let count = seen.entry(*state).or_insert(0);
        *count += 1;
        *count
    };

    if state.is_terminal(board) || depth == 0 {
        return score_leaf(board, state, repeats);
    }

    if state.turn == Turn::A {
        let mut best = -INF;
        for mv in ordered_candidates(board, state) {
            let next = apply_move(board, state, mv);
            best = best.max(alphabeta(board, &next, depth - 1, alpha, beta, seen));
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for mv in ordered_candidates(board, state) {
            let next = apply_move(board, state, mv);
            best = best.min(alphabeta(board, &next, depth - 1, alpha, beta, seen));
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Terminal leaves score by true outcome; heuristic leaves pay the
/// repetition penalty for every visit beyond the first.
fn score_leaf(board: &Board, state: &GameState, repeats: u32) -> i32 {
    if state.is_terminal(board) {
        return state.utility() * TERMINAL_BOOST;
    }
    let mut score = evaluate(board, state);
    if repeats > 1 {
        score -= LOOP_PENALTY * (repeats - 1) as i32;
    }
    score
}

/// Candidates sorted by priority key: carriers head for their base first,
/// empty bags head for the nearest remaining resource.
fn ordered_candidates(board: &Board, state: &GameState) -> Vec<Coord> {
    let mut moves = candidate_moves(board, state);
    moves.sort_by_key(|&mv| order_key(board, state, mv));
    moves
}

fn order_key(board: &Board, state: &GameState, mv: Coord) -> (u8, u32) {
    let me = state.active();
    let home = state.turn.home();

    if me.bag.is_full(board.capacity()) {
        return (0, mv.manhattan(home));
    }
    if !me.bag.is_empty() {
        return (1, mv.manhattan(home));
    }
    (2, nearest_uncollected(board, state, mv).unwrap_or(FALLBACK_DIST))
}

/// Plain Manhattan distance from `pos` to the nearest uncollected resource.
fn nearest_uncollected(board: &Board, state: &GameState, pos: Coord) -> Option<u32> {
    let mut best: Option<u32> = None;
    for res in board.resources() {
        if state.is_collected(res.id) {
            continue;
        }
        let d = pos.manhattan(res.pos);
        best = Some(match best {
            Some(b) => b.min(d),
            None => d,
        });
    }
    best
}

fn is_better(val: i32, best: i32, is_max: bool) -> bool {
    if is_max {
        val > best
    } else {
        val < best
    }
}

fn closer_to(mv: Coord, best: Option<Coord>, home: Coord) -> bool {
    match best {
        None => true,
        Some(b) => mv.manhattan(home) < b.manhattan(home),
    }
}
