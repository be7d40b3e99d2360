//! Legal move generation and state transitions.
//!
//! Movement is 4-directional; the step cost is the destination cell's
//! terrain enter cost. On entering a cell the rules apply in a fixed
//! order: deposit first (so a full bag can be dropped at the base and the
//! resource on that very cell picked up in the same move), then pickup if
//! the destination holds an unconsumed resource and the bag has room.

use crate::board::{Board, Coord, KIND_COUNT};
use crate::state::{GameState, Player, SearchState, Turn};

/// Applies one single-agent transition to `dest`.
///
/// Returns the successor state and its step cost, or `None` if `dest` is
/// out of bounds or not 4-adjacent to the current position.
pub fn step(board: &Board, state: &SearchState, dest: Coord) -> Option<(SearchState, u32)> {
    if !board.in_bounds(dest) || !state.pos.is_adjacent(dest) {
        return None;
    }
    let step_cost = board.enter_cost(dest);

    let mut next = *state;
    next.pos = dest;

    // Deposit: bank the bag at the base, clamping each kind to its
    // requirement. Excess units are discarded, not rolled over.
    if dest == board.base() && !next.bag.is_empty() {
        let carried = next.bag.take_all();
        let required = board.required();
        for i in 0..KIND_COUNT {
            next.delivered[i] = (next.delivered[i] + carried[i]).min(required[i]);
        }
    }

    // Pickup: a full bag leaves the resource on the board for a later pass.
    if let Some(res) = board.resource_at(dest) {
        if !next.has_consumed(res.id) && !next.bag.is_full(board.capacity()) {
            next.bag.add(res.kind);
            next.consumed |= 1 << res.id;
        }
    }

    Some((next, step_cost))
}

/// Generates all valid successors of a single-agent state (up to 4).
pub fn successors(board: &Board, state: &SearchState) -> Vec<(SearchState, u32)> {
    state
        .pos
        .neighbors()
        .filter_map(|dest| step(board, state, dest))
        .collect()
}

/// All in-bounds 4-neighbor destinations for the active player.
pub fn legal_moves(state: &GameState) -> Vec<Coord> {
    state.active().pos.neighbors().collect()
}

/// Candidate moves under the bag-full policy.
///
/// With a full bag only moves that strictly reduce the distance to the
/// mover's own base are kept; the base itself, when reachable, becomes the
/// sole candidate. If nothing gets closer the full legal set is used so the
/// player is never left without a move.
pub fn candidate_moves(board: &Board, state: &GameState) -> Vec<Coord> {
    let me = state.active();
    let moves = legal_moves(state);
    if !me.bag.is_full(board.capacity()) {
        return moves;
    }

    let home = state.turn.home();
    let here = me.pos.manhattan(home);
    let closer: Vec<Coord> = moves
        .iter()
        .copied()
        .filter(|m| m.manhattan(home) < here)
        .collect();

    if closer.contains(&home) {
        return vec![home];
    }
    if closer.is_empty() {
        moves
    } else {
        closer
    }
}

fn active_mut(state: &mut GameState) -> &mut Player {
    match state.turn {
        Turn::A => &mut state.a,
        Turn::B => &mut state.b,
    }
}

/// Executes one two-agent move for the active player and flips the turn.
///
/// The destination must come from `legal_moves`/`candidate_moves`.
pub fn apply_move(board: &Board, state: &GameState, dest: Coord) -> GameState {
    debug_assert!(board.in_bounds(dest));
    debug_assert!(state.active().pos.is_adjacent(dest));

    let mut next = *state;
    let turn = next.turn;
    let home = turn.home();

    let me = active_mut(&mut next);
    me.pos = dest;

    // Deposit everything when stepping onto the own base.
    if dest == home && !me.bag.is_empty() {
        let carried = me.bag.take_all();
        me.delivered_total += carried.iter().sum::<u8>();
    }

    // Pickup flips a bit in the shared mask, so it is mutually exclusive
    // between the two players.
    if let Some(res) = board.resource_at(dest) {
        let id = res.id;
        let kind = res.kind;
        if !state.is_collected(id) {
            let me = active_mut(&mut next);
            if !me.bag.is_full(board.capacity()) {
                me.bag.add(kind);
                next.collected |= 1 << id;
            }
        }
    }

    next.turn = turn.other();
    next
}
