//! Click routing for board-based front ends.
//!
//! A front end only knows which point was clicked. The state decides which
//! action that click means.

use tracing::debug;

use super::game::GameEngine;
use crate::core::{Action, GameState, Phase, Position};

/// Map a click on `position` to the action the current state expects.
///
/// - Game over: nothing
/// - Mill pending: remove the clicked piece
/// - Placing: place on the clicked cell
/// - Moving, nothing selected: select the clicked piece
/// - Moving, piece selected: reselect if another own piece was clicked,
///   otherwise move there. Clicking the selected piece again routes to a
///   move onto an occupied cell, which is rejected and drops the selection.
#[must_use]
pub fn route_click(state: &GameState, position: Position) -> Option<Action> {
    if state.is_over() {
        return None;
    }
    if state.is_mill_pending() {
        return Some(Action::Remove(position));
    }

    let action = match (state.phase(), state.selected()) {
        (Phase::Placing, _) => Action::Place(position),
        (Phase::Moving, None) => Action::Select(position),
        (Phase::Moving, Some(from))
            if from != position && state.board().is_owned_by(position, state.current_player()) =>
        {
            Action::Select(position)
        }
        (Phase::Moving, Some(_)) => Action::Move(position),
    };
    Some(action)
}

impl GameEngine {
    /// Handle a click on the board point with the given index.
    ///
    /// Returns true if the routed action was accepted.
    pub fn handle_click(&mut self, index: usize) -> bool {
        let Ok(position) = Position::try_from(index) else {
            debug!(index, "click outside the board");
            return false;
        };
        match route_click(self.state(), position) {
            Some(action) => self.apply(action).is_ok(),
            None => {
                debug!(%position, "click ignored, game is over");
                false
            }
        }
    }
}
