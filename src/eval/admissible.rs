//! Admissible heuristics for the single-agent search.
//!
//! Every estimator multiplies Manhattan distances by the cheapest terrain
//! cost, so it never overstates the true remaining cost and A* stays
//! cost-optimal. `Combined` takes the max of the two non-trivial bounds,
//! which is itself a valid lower bound and usually guides best.

use crate::board::{Board, Coord, KIND_COUNT};
use crate::state::SearchState;

/// Heuristic selector for `solve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Always 0; turns A* into uniform-cost search. Baseline for
    /// cost-optimality cross-checks.
    Zero,
    /// Distance to the next mandatory stop (base when the bag is full,
    /// otherwise the nearest still-needed resource).
    H1,
    /// Round-trip lower bound from the number of collection trips still
    /// required under the bag capacity.
    Trips,
    /// `max(H1, Trips)`.
    Combined,
}

impl Heuristic {
    /// Lower-bound estimate of the remaining cost from `state` to the goal.
    pub fn estimate(self, board: &Board, state: &SearchState) -> u32 {
        match self {
            Heuristic::Zero => 0,
            Heuristic::H1 => h1(board, state),
            Heuristic::Trips => h_trips(board, state),
            Heuristic::Combined => h1(board, state).max(h_trips(board, state)),
        }
    }
}

/// Manhattan distance from `from` to the nearest unconsumed resource of a
/// kind with a positive count in `needed`. `None` when no such resource is
/// left on the board.
fn nearest_needed_distance(
    board: &Board,
    state: &SearchState,
    from: Coord,
    needed: [u8; KIND_COUNT],
) -> Option<u32> {
    let mut best: Option<u32> = None;
    for res in board.resources() {
        if needed[res.kind.index()] == 0 || state.has_consumed(res.id) {
            continue;
        }
        let d = from.manhattan(res.pos);
        best = Some(match best {
            Some(b) => b.min(d),
            None => d,
        });
    }
    best
}

/// Next-mandatory-stop bound.
///
/// A full bag forces a base visit; otherwise the nearest still-needed
/// resource must be reached; otherwise a non-empty bag still owes one
/// delivery leg. Falls back to the base distance when no qualifying
/// resource can be found.
fn h1(board: &Board, state: &SearchState) -> u32 {
    let min_cost = board.cheapest_terrain_cost();

    if state.bag.is_full(board.capacity()) {
        return state.pos.manhattan(board.base()) * min_cost;
    }

    let need = state.remaining_to_collect(board);
    if need.iter().any(|&n| n > 0) {
        return match nearest_needed_distance(board, state, state.pos, need) {
            Some(d) => d * min_cost,
            None => state.pos.manhattan(board.base()) * min_cost,
        };
    }

    if !state.bag.is_empty() {
        return state.pos.manhattan(board.base()) * min_cost;
    }

    0
}

/// Trip-count bound.
///
/// Counts the units still owed to delivery beyond what is carried, divides
/// by the bag capacity to get a minimum number of collection trips, and
/// charges each trip an optimistic round trip from the base to the nearest
/// still-needed resource.
fn h_trips(board: &Board, state: &SearchState) -> u32 {
    let min_cost = board.cheapest_terrain_cost();
    let rem = state.remaining_to_deliver(board);
    let owed: u32 = rem.iter().map(|&n| n as u32).sum();

    let uncollected = owed.saturating_sub(state.total_carried() as u32);
    if uncollected == 0 {
        return 0;
    }

    let capacity = board.capacity() as u32;
    let trips = uncollected.div_ceil(capacity);

    let base_to_nearest = match nearest_needed_distance(board, state, board.base(), rem) {
        Some(d) => d,
        None => return 0,
    };

    trips * 2 * base_to_nearest * min_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ResourceKind, Terrain};

    fn board() -> Board {
        Board::new(
            [[Terrain::Grass; 5]; 5],
            &[
                (Coord::new(0, 3), ResourceKind::Stone),
                (Coord::new(4, 0), ResourceKind::Stone),
                (Coord::new(4, 2), ResourceKind::Stone),
                (Coord::new(2, 4), ResourceKind::Iron),
                (Coord::new(4, 4), ResourceKind::Iron),
                (Coord::new(1, 4), ResourceKind::Crystal),
            ],
        )
        .unwrap()
    }

    #[test]
    fn zero_is_zero_everywhere() {
        let board = board();
        let s = SearchState::start(&board);
        assert_eq!(Heuristic::Zero.estimate(&board, &s), 0);
    }

    #[test]
    fn h1_full_bag_points_home() {
        let board = board();
        let mut s = SearchState::start(&board);
        s.pos = Coord::new(3, 3);
        s.bag.add(ResourceKind::Stone);
        s.bag.add(ResourceKind::Stone);
        assert_eq!(Heuristic::H1.estimate(&board, &s), 6);
    }

    #[test]
    fn h1_targets_nearest_needed_resource() {
        let board = board();
        let s = SearchState::start(&board);
        // Nearest needed from (0,0) is the stone at (0,3), distance 3.
        assert_eq!(Heuristic::H1.estimate(&board, &s), 3);
    }

    #[test]
    fn h1_ignores_consumed_and_unneeded_kinds() {
        let board = board();
        let mut s = SearchState::start(&board);
        s.delivered = [3, 2, 0]; // only crystal still needed
        s.consumed = 0b000111; // all three stones gone anyway
        // Nearest crystal from (0,0): (1,4), distance 5.
        assert_eq!(Heuristic::H1.estimate(&board, &s), 5);
    }

    #[test]
    fn h1_owes_delivery_when_bag_covers_the_rest() {
        let board = board();
        let mut s = SearchState::start(&board);
        s.pos = Coord::new(2, 4);
        s.delivered = [3, 2, 0];
        s.bag.add(ResourceKind::Crystal);
        // Nothing left to collect; one crystal to walk home.
        assert_eq!(Heuristic::H1.estimate(&board, &s), 6);
    }

    #[test]
    fn h1_is_zero_at_goal() {
        let board = board();
        let mut s = SearchState::start(&board);
        s.delivered = [3, 2, 1];
        assert_eq!(Heuristic::H1.estimate(&board, &s), 0);
        assert_eq!(Heuristic::Combined.estimate(&board, &s), 0);
    }

    #[test]
    fn trips_counts_round_trips() {
        let board = board();
        let s = SearchState::start(&board);
        // 6 units owed, capacity 2 -> 3 trips; nearest needed resource from
        // base is the stone at (0,3): 3 * 2 * 3 = 18.
        assert_eq!(Heuristic::Trips.estimate(&board, &s), 18);
    }

    #[test]
    fn trips_discounts_carried_units() {
        let board = board();
        let mut s = SearchState::start(&board);
        s.delivered = [3, 2, 0];
        s.bag.add(ResourceKind::Crystal);
        // One unit owed but already in the bag: no trips left.
        assert_eq!(Heuristic::Trips.estimate(&board, &s), 0);
    }

    #[test]
    fn combined_dominates_both_parts() {
        let board = board();
        let mut states = vec![SearchState::start(&board)];
        let mut far = SearchState::start(&board);
        far.pos = Coord::new(4, 3);
        far.bag.add(ResourceKind::Stone);
        states.push(far);

        for s in states {
            let h1 = Heuristic::H1.estimate(&board, &s);
            let tr = Heuristic::Trips.estimate(&board, &s);
            assert_eq!(Heuristic::Combined.estimate(&board, &s), h1.max(tr));
        }
    }
}
