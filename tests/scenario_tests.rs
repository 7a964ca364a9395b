//! End-to-end game scenarios driven through the public engine API.

mod common;

use common::{at, init_tracing, moving_engine, place_all};
use morris_engine::{Action, GameEngine, Phase, Player, RuleViolation};

/// Placements (A first) that fill both hands without ever forming a mill.
const QUIET_PLACEMENTS: [usize; 18] = [1, 3, 2, 6, 4, 7, 5, 8, 9, 11, 14, 12, 15, 13, 16, 18, 19, 23];

/// Placements (A first) where B's ninth piece at 10 closes 8-9-10.
const LAST_PLACEMENT_MILL: [usize; 18] = [4, 5, 16, 14, 11, 13, 15, 7, 2, 1, 0, 20, 23, 9, 19, 8, 12, 10];

// =============================================================================
// Mills during placement
// =============================================================================

#[test]
fn test_mill_on_placement_keeps_turn() {
    init_tracing();
    let mut engine = GameEngine::new();
    place_all(&mut engine, &[0, 8, 1, 9, 2]);

    let state = engine.state();
    assert!(state.is_mill_pending());
    assert_eq!(state.current_player(), Player::A);
    assert_eq!(
        state.mill_positions().into_iter().collect::<Vec<_>>(),
        vec![at(0), at(1), at(2)]
    );

    let legal = engine.legal_actions();
    assert_eq!(legal, vec![Action::Remove(at(8)), Action::Remove(at(9))]);
}

#[test]
fn test_blocked_line_is_not_a_mill() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, &[0, 2, 1]);

    assert!(!engine.state().is_mill_pending());
    assert_eq!(engine.state().current_player(), Player::B);
}

#[test]
fn test_removal_after_placement_mill() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, &[0, 8, 1, 9, 2]);

    assert!(!engine.remove_piece(1), "own piece");
    assert!(!engine.remove_piece(20), "empty cell");
    assert!(!engine.place_piece(20), "placement blocked while mill pending");

    assert!(engine.remove_piece(9));
    let state = engine.state();
    assert!(!state.is_mill_pending());
    assert_eq!(state.current_player(), Player::B);
    assert_eq!(state.board().count(Player::B), 1);
    assert_eq!(state.placed_by(Player::B), 2);
    assert_eq!(state.phase(), Phase::Placing);
}

#[test]
fn test_double_mill_grants_one_removal() {
    let mut engine = GameEngine::new();
    // A builds 0-1 and 3-4, then closes both lines at 2.
    place_all(&mut engine, &[0, 8, 1, 9, 3, 12, 4, 13]);
    assert!(engine.place_piece(2));

    let state = engine.state();
    assert_eq!(state.mill().map(|m| m.mills.len()), Some(2));
    assert_eq!(state.mill_positions().len(), 5);

    assert!(engine.remove_piece(8));
    assert!(!engine.state().is_mill_pending());
    assert!(!engine.remove_piece(9), "only one removal per move");
    assert_eq!(engine.state().current_player(), Player::B);
}

// =============================================================================
// Phase transition
// =============================================================================

#[test]
fn test_full_placement_enters_moving() {
    init_tracing();
    let mut engine = GameEngine::new();

    place_all(&mut engine, &QUIET_PLACEMENTS[..17]);
    assert_eq!(engine.state().phase(), Phase::Placing);
    assert_eq!(engine.state().placed_by(Player::A), 9);
    assert_eq!(engine.state().placed_by(Player::B), 8);
    assert_eq!(engine.state().current_player(), Player::B);

    place_all(&mut engine, &QUIET_PLACEMENTS[17..]);
    let state = engine.state();
    assert_eq!(state.phase(), Phase::Moving);
    assert_eq!(state.current_player(), Player::A);
    assert_eq!(state.board().piece_count(), 18);
    assert_eq!(state.skip_message(), None);

    assert_eq!(
        engine.try_place_piece(0),
        Err(RuleViolation::WrongPhase { action: "place", phase: Phase::Moving })
    );
}

#[test]
fn test_first_slide_after_placement() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, &QUIET_PLACEMENTS);

    // A slides 1 -> 0.
    assert!(engine.select_piece(1));
    assert!(engine.move_piece(0));

    let state = engine.state();
    assert_eq!(state.board().get(at(0)), Some(Player::A));
    assert!(state.board().is_empty(at(1)));
    assert_eq!(state.current_player(), Player::B);
    assert_eq!(state.phase(), Phase::Moving);
}

#[test]
fn test_mill_on_last_placement_removes_in_moving() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, &LAST_PLACEMENT_MILL);

    let state = engine.state();
    assert_eq!(state.phase(), Phase::Moving);
    assert!(state.is_mill_pending());
    assert_eq!(state.current_player(), Player::B);
    assert_eq!(state.winner(), None);

    assert!(engine.remove_piece(16));
    let state = engine.state();
    assert_eq!(state.current_player(), Player::A);
    assert_eq!(state.board().count(Player::A), 8);
    assert_eq!(state.skip_message(), None);
    assert_eq!(state.phase(), Phase::Moving);
}

#[test]
fn test_largest_configuration_leaves_a_move() {
    // With 12 pieces each a mill-free placement fills the board and nobody
    // can ever slide again.
    assert!(GameEngine::builder().max_pieces_per_player(12).build().is_err());

    // 11 each leaves 22 and 23 empty after this mill-free placement.
    let mut engine = GameEngine::builder().max_pieces_per_player(11).build().unwrap();
    place_all(
        &mut engine,
        &[0, 1, 4, 2, 6, 3, 8, 5, 9, 7, 11, 10, 13, 12, 15, 14, 17, 16, 19, 18, 21, 20],
    );

    let state = engine.state();
    assert_eq!(state.phase(), Phase::Moving);
    assert_eq!(state.board().piece_count(), 22);
    assert_eq!(state.current_player(), Player::A);
    assert_eq!(state.skip_message(), None);

    // A slides 21 -> 22 and play continues.
    assert!(engine.select_piece(21));
    assert!(engine.move_piece(22));
    assert_eq!(engine.state().current_player(), Player::B);
    assert!(!engine.legal_actions().is_empty());
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_capture_to_two_pieces_wins() {
    init_tracing();
    // B slides 7 -> 6 closing 4-5-6, then takes one of A's three pieces.
    let mut engine = moving_engine(&[0, 10, 20], &[4, 5, 7], Player::B);

    assert!(engine.select_piece(7));
    assert!(engine.move_piece(6));
    assert!(engine.state().is_mill_pending());
    assert_eq!(engine.state().current_player(), Player::B);

    assert!(engine.remove_piece(10));
    let state = engine.state();
    assert_eq!(state.winner(), Some(Player::B));
    assert_eq!(state.phase(), Phase::Moving);

    let result = engine.result().unwrap();
    assert!(result.is_winner(Player::B));
    assert_eq!(result.loser_pieces, 2);
}

#[test]
fn test_game_over_is_terminal() {
    let mut engine = moving_engine(&[0, 10, 20], &[4, 5, 7], Player::B);
    assert!(engine.select_piece(7));
    assert!(engine.move_piece(6));
    assert!(engine.remove_piece(10));

    let frozen = engine.snapshot();
    assert!(!engine.select_piece(0));
    assert!(!engine.select_piece(4));
    assert!(!engine.move_piece(1));
    assert!(!engine.remove_piece(0));
    assert!(!engine.place_piece(12));
    assert!(!engine.handle_click(0));
    engine.run_turn_checks();

    assert_eq!(engine.snapshot(), frozen);
    assert!(engine.legal_actions().is_empty());
    assert_eq!(engine.try_select_piece(4), Err(RuleViolation::GameOver));
}

// =============================================================================
// Skipping
// =============================================================================

#[test]
fn test_boxed_in_player_is_skipped() {
    init_tracing();
    // A's pieces on 0, 2, 4 are surrounded by B on 1, 3, 5, 7.
    let mut engine = moving_engine(&[0, 2, 4], &[1, 3, 5, 7], Player::A);
    assert!(engine.select_piece(0));

    engine.run_turn_checks();

    let state = engine.state();
    assert_eq!(state.current_player(), Player::B);
    assert_eq!(state.phase(), Phase::Moving);
    assert_eq!(state.selected(), None);
    assert_eq!(state.skip_message(), Some("Player A has no valid moves, turn skipped!"));

    engine.clear_skip_message();
    assert_eq!(engine.state().skip_message(), None);
    assert_eq!(engine.state().current_player(), Player::B);
}

#[test]
fn test_skip_follows_blocking_move() {
    // B slides 15 -> 7, closing A in; the turn comes straight back to B.
    let mut engine = moving_engine(&[0, 2, 4], &[1, 3, 5, 15], Player::B);

    assert!(engine.select_piece(15));
    assert!(engine.move_piece(7));

    let state = engine.state();
    assert_eq!(state.current_player(), Player::B);
    assert!(state.skip_message().is_some());
    assert!(!state.is_mill_pending());
}

#[test]
fn test_no_skip_while_moves_exist() {
    let mut engine = moving_engine(&[0, 10, 20], &[4, 5, 7], Player::A);
    engine.run_turn_checks();

    assert_eq!(engine.state().current_player(), Player::A);
    assert_eq!(engine.state().skip_message(), None);
}

// =============================================================================
// Click routing
// =============================================================================

#[test]
fn test_click_driven_game() {
    let mut engine = GameEngine::new();
    for index in [0, 8, 1, 9, 2] {
        assert!(engine.handle_click(index));
    }
    assert!(engine.state().is_mill_pending());

    // While a mill is pending, clicks remove.
    assert!(!engine.handle_click(1));
    assert!(engine.handle_click(8));
    assert_eq!(engine.state().current_player(), Player::B);
    assert!(engine.state().board().is_empty(at(8)));
}
