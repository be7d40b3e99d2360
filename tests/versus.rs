//! Integration tests for the two-agent competitive game.
//!
//! Drives full matches through `apply_move`, both scripted and with the
//! search agents, checking the terminal and invariant properties.

use prospector::board::{Board, Coord};
use prospector::movegen::{apply_move, legal_moves};
use prospector::search::{AlphaBetaAgent, RandomAgent};
use prospector::state::{GameState, Turn};

/// The symmetric duel board: all grass, one resource adjacent to each base.
fn duel_board() -> Board {
    let terrain = vec![vec!["GRASS"; 5]; 5];
    Board::from_tokens(
        &terrain,
        &[(Coord::new(0, 1), "STONE"), (Coord::new(3, 4), "IRON")],
    )
    .unwrap()
}

fn check_invariants(board: &Board, state: &GameState) {
    assert!(state.a.bag.total() <= board.capacity());
    assert!(state.b.bag.total() <= board.capacity());
    assert!(
        (state.a.delivered_total + state.b.delivered_total) as usize <= board.resource_count(),
        "combined deliveries cannot exceed the resource pool"
    );
}

#[test]
fn scripted_symmetric_duel_ends_even() {
    let board = duel_board();
    let mut state = GameState::initial();
    assert!(!state.is_terminal(&board));

    // Each player fetches the resource next to their own base.
    for mv in [
        Coord::new(0, 1), // A picks up the stone
        Coord::new(3, 4), // B picks up the iron
        Coord::new(0, 0), // A delivers
        Coord::new(4, 4), // B delivers
    ] {
        assert!(!state.is_terminal(&board));
        state = apply_move(&board, &state, mv);
        check_invariants(&board, &state);
    }

    assert!(state.is_terminal(&board));
    assert_eq!(state.a.delivered_total, 1);
    assert_eq!(state.b.delivered_total, 1);
    assert_eq!(state.utility(), 0);
}

#[test]
fn terminal_tracks_the_delivered_sum_exactly() {
    let board = duel_board();
    let mut state = GameState::initial();

    state = apply_move(&board, &state, Coord::new(0, 1));
    state = apply_move(&board, &state, Coord::new(3, 4));
    state = apply_move(&board, &state, Coord::new(0, 0));
    // A delivered, B still carrying: 1 of 2 delivered, not terminal.
    assert_eq!(state.a.delivered_total + state.b.delivered_total, 1);
    assert!(!state.is_terminal(&board));

    state = apply_move(&board, &state, Coord::new(4, 4));
    assert_eq!(state.a.delivered_total + state.b.delivered_total, 2);
    assert!(state.is_terminal(&board));
}

#[test]
fn search_agent_opens_with_the_adjacent_pickup() {
    let board = duel_board();
    let agent = AlphaBetaAgent::new(4);
    let mv = agent.decide_move(&board, &GameState::initial());
    assert_eq!(mv, Some(Coord::new(0, 1)));
}

#[test]
fn minimax_versus_random_keeps_invariants() {
    let board = duel_board();
    let minimax = AlphaBetaAgent::new(3);
    let mut random = RandomAgent::seeded(2024);
    let mut state = GameState::initial();

    for _ in 0..200 {
        if state.is_terminal(&board) {
            break;
        }
        let mv = match state.turn {
            Turn::A => minimax.decide_move(&board, &state),
            Turn::B => random.decide_move(&state),
        };
        let Some(mv) = mv else { break };
        assert!(legal_moves(&state).contains(&mv));
        state = apply_move(&board, &state, mv);
        check_invariants(&board, &state);
    }

    // The maximizer grabs its neighboring resource within the first turns.
    assert_ne!(state.collected, 0);
}

#[test]
fn moves_alternate_strictly() {
    let board = duel_board();
    let mut state = GameState::initial();
    let mut turn = state.turn;
    for _ in 0..10 {
        let mv = legal_moves(&state)[0];
        state = apply_move(&board, &state, mv);
        assert_eq!(state.turn, turn.other());
        turn = state.turn;
    }
}
