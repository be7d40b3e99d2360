//! Best-first (A*) search over the single-agent state space.
//!
//! Works with lazy reopening instead of a closed set: the frontier may hold
//! several entries for one state, and any entry whose recorded cost no
//! longer matches the best-known cost is discarded on pop. States are
//! `Copy` values, so they key the cost and parent tables directly and the
//! parent map doubles as the state archive for path reconstruction.
//!
//! Cost-optimality of the returned path requires an admissible heuristic;
//! the engine itself does not verify admissibility.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::board::{Board, Coord};
use crate::eval::Heuristic;
use crate::movegen::successors;
use crate::state::SearchState;

/// Outcome of a `solve` call.
///
/// `solved == false` is a normal outcome (the goal is unreachable), not an
/// error; `path`, `total_cost`, and `final_state` are absent in that case.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    pub solved: bool,
    /// Coordinates from the start to the goal, both inclusive.
    pub path: Option<Vec<Coord>>,
    /// Sum of destination enter costs along the path.
    pub total_cost: Option<u32>,
    /// Number of nodes expanded (popped live and not a goal).
    pub expanded: u64,
    pub elapsed: Duration,
    /// The goal state, for its delivered-counts breakdown.
    pub final_state: Option<SearchState>,
}

/// One frontier entry. Ordered so the heap pops the lowest f, breaking ties
/// by lower h, then higher g, then insertion order, which keeps pop order
/// fully deterministic.
struct OpenEntry {
    f: u32,
    h: u32,
    g: u32,
    seq: u64,
    state: SearchState,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so "greater" means "pop first".
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-cost action sequence from the start state to the goal.
pub fn solve(board: &Board, heuristic: Heuristic) -> SolveResult {
    let t0 = Instant::now();
    let start = SearchState::start(board);

    let mut open = BinaryHeap::new();
    let mut best_g: HashMap<SearchState, u32> = HashMap::new();
    let mut came_from: HashMap<SearchState, SearchState> = HashMap::new();
    let mut expanded: u64 = 0;
    let mut seq: u64 = 0;

    best_g.insert(start, 0);
    let h0 = heuristic.estimate(board, &start);
    open.push(OpenEntry {
        f: h0,
        h: h0,
        g: 0,
        seq,
        state: start,
    });
    seq += 1;

    let mut goal: Option<SearchState> = None;

    while let Some(entry) = open.pop() {
        // Stale entry: a cheaper route to this state was found after this
        // entry was pushed. Skip without expanding.
        if best_g.get(&entry.state) != Some(&entry.g) {
            continue;
        }

        if entry.state.is_goal(board) {
            goal = Some(entry.state);
            break;
        }
        expanded += 1;

        for (succ, step_cost) in successors(board, &entry.state) {
            let new_g = entry.g + step_cost;
            if best_g.get(&succ).map_or(true, |&g| new_g < g) {
                best_g.insert(succ, new_g);
                came_from.insert(succ, entry.state);
                let h = heuristic.estimate(board, &succ);
                open.push(OpenEntry {
                    f: new_g + h,
                    h,
                    g: new_g,
                    seq,
                    state: succ,
                });
                seq += 1;
            }
        }
    }

    let elapsed = t0.elapsed();
    match goal {
        Some(goal_state) => SolveResult {
            solved: true,
            path: Some(reconstruct_path(&came_from, goal_state)),
            total_cost: best_g.get(&goal_state).copied(),
            expanded,
            elapsed,
            final_state: Some(goal_state),
        },
        None => SolveResult {
            solved: false,
            path: None,
            total_cost: None,
            expanded,
            elapsed,
            final_state: None,
        },
    }
}

/// Walks the parent pointers from the goal back to the start and reverses.
fn reconstruct_path(
    came_from: &HashMap<SearchState, SearchState>,
    goal: SearchState,
) -> Vec<Coord> {
    let mut path = vec![goal.pos];
    let mut cur = goal;
    while let Some(&parent) = came_from.get(&cur) {
        path.push(parent.pos);
        cur = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ResourceKind, Terrain};

    fn grass_board(resources: &[(Coord, ResourceKind)]) -> Board {
        Board::new([[Terrain::Grass; 5]; 5], resources).unwrap()
    }

    #[test]
    fn trivial_goal_solves_in_place() {
        let board = grass_board(&[]).with_required([0, 0, 0]);
        let result = solve(&board, Heuristic::Combined);
        assert!(result.solved);
        assert_eq!(result.path, Some(vec![Coord::new(0, 0)]));
        assert_eq!(result.total_cost, Some(0));
        assert_eq!(result.expanded, 0);
    }

    #[test]
    fn unreachable_goal_reports_unsolved() {
        // Requirement asks for a crystal that does not exist on the board.
        let board = grass_board(&[(Coord::new(2, 2), ResourceKind::Stone)])
            .with_required([1, 0, 1]);
        let result = solve(&board, Heuristic::Combined);
        assert!(!result.solved);
        assert!(result.path.is_none());
        assert!(result.total_cost.is_none());
        assert!(result.final_state.is_none());
        assert!(result.expanded > 0);
    }

    #[test]
    fn single_fetch_round_trip() {
        let board = grass_board(&[(Coord::new(0, 1), ResourceKind::Stone)])
            .with_required([1, 0, 0])
            .with_capacity(1);
        let result = solve(&board, Heuristic::Combined);
        assert!(result.solved);
        assert_eq!(
            result.path,
            Some(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 0)])
        );
        assert_eq!(result.total_cost, Some(2));
        let final_state = result.final_state.unwrap();
        assert_eq!(final_state.delivered, [1, 0, 0]);
        assert!(final_state.bag.is_empty());
    }

    #[test]
    fn terrain_costs_shape_the_route() {
        // A mountain wall on row 0 makes the southern detour cheaper.
        let mut terrain = [[Terrain::Grass; 5]; 5];
        terrain[0][1] = Terrain::Mountain;
        terrain[0][2] = Terrain::Mountain;
        let board = Board::new(terrain, &[(Coord::new(0, 3), ResourceKind::Stone)])
            .unwrap()
            .with_required([1, 0, 0]);
        let result = solve(&board, Heuristic::Combined);
        assert!(result.solved);
        let path = result.path.unwrap();
        // Going around through row 1 costs 1 per step; both mountain cells
        // together would cost 8 extra each way.
        assert!(!path.contains(&Coord::new(0, 1)));
        assert!(!path.contains(&Coord::new(0, 2)));
        assert_eq!(result.total_cost, Some(10));
    }

    #[test]
    fn heuristics_agree_on_total_cost() {
        let board = grass_board(&[
            (Coord::new(0, 2), ResourceKind::Stone),
            (Coord::new(2, 2), ResourceKind::Stone),
            (Coord::new(3, 1), ResourceKind::Iron),
        ])
        .with_required([2, 1, 0]);

        let uniform = solve(&board, Heuristic::Zero);
        assert!(uniform.solved);
        for h in [Heuristic::H1, Heuristic::Trips, Heuristic::Combined] {
            let informed = solve(&board, h);
            assert!(informed.solved);
            assert_eq!(informed.total_cost, uniform.total_cost, "{h:?}");
            assert!(
                informed.expanded <= uniform.expanded,
                "{h:?} expanded more nodes than uniform cost"
            );
        }
    }

    #[test]
    fn repeated_solves_are_identical() {
        let board = grass_board(&[
            (Coord::new(1, 3), ResourceKind::Stone),
            (Coord::new(4, 0), ResourceKind::Iron),
        ])
        .with_required([1, 1, 0]);

        let first = solve(&board, Heuristic::Combined);
        let second = solve(&board, Heuristic::Combined);
        assert_eq!(first.path, second.path);
        assert_eq!(first.total_cost, second.total_cost);
        assert_eq!(first.expanded, second.expanded);
    }
}
