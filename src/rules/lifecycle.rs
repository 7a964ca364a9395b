//! Post-transition checks.
//!
//! After every accepted transition the engine runs, in order:
//! 1. Placing -> Moving once both players have placed all pieces
//! 2. Win check (Moving phase only)
//! 3. Auto-skip when the player to move has no legal slide
//!
//! Each step is a pure function of the snapshot, so the order is explicit
//! and nothing re-enters.

use tracing::info;

use super::queries::{can_transition_to_moving, check_win_condition, has_valid_moves};
use crate::core::{GameState, MorrisConfig, Phase, Player, TurnStep};

/// Run every post-check on a freshly produced snapshot.
#[must_use]
pub fn settle(state: GameState, config: &MorrisConfig) -> GameState {
    let state = advance_phase(state, config);
    let state = declare_winner(state, config);
    auto_skip(state)
}

/// Enter the Moving phase once both players have placed all their pieces.
#[must_use]
pub fn advance_phase(mut state: GameState, config: &MorrisConfig) -> GameState {
    if state.phase == Phase::Placing && can_transition_to_moving(&state.placed, config) {
        info!("all pieces placed, entering moving phase");
        state.phase = Phase::Moving;
    }
    state
}

/// Record the winner if a player has dropped to the losing threshold.
#[must_use]
pub fn declare_winner(mut state: GameState, config: &MorrisConfig) -> GameState {
    if state.phase == Phase::Moving && state.winner.is_none() {
        if let Some(winner) = check_win_condition(&state.board, config) {
            info!(%winner, "game over");
            state.winner = Some(winner);
        }
    }
    state
}

/// Pass the turn if the player to move is boxed in.
///
/// Only applies in the Moving phase with no pending mill and no winner. At
/// most one skip happens: on the connected board a blocked player's opponent
/// always has a slide while empty cells remain.
#[must_use]
pub fn auto_skip(mut state: GameState) -> GameState {
    let player = state.current_player;
    let blocked = state.phase == Phase::Moving
        && !state.is_mill_pending()
        && state.winner.is_none()
        && !has_valid_moves(&state.board, player);

    if blocked {
        info!(%player, "no valid moves, turn skipped");
        state.skip_message = Some(skip_notice(player));
        state.current_player = player.opponent();
        state.step = TurnStep::Idle;
    }
    state
}

/// Advisory text shown when `player` loses a turn.
#[must_use]
pub fn skip_notice(player: Player) -> String {
    format!("Player {player} has no valid moves, turn skipped!")
}
