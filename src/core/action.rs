//! Player inputs.
//!
//! Every driver input is one of four verbs applied to a single board
//! position. The same verbs are produced by legal-action enumeration and by
//! click routing, so a driver can treat them uniformly.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A single player input.
///
/// ```
/// use morris_engine::core::{Action, Position};
///
/// let place = Action::Place(Position::new(3).unwrap());
/// assert_eq!(place.position().index(), 3);
/// assert_eq!(place.to_string(), "place 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put a new piece on an empty cell (Placing phase).
    Place(Position),
    /// Pick one of your pieces to move (Moving phase).
    Select(Position),
    /// Slide the selected piece to an adjacent empty cell.
    Move(Position),
    /// Take an opponent piece after forming a mill.
    Remove(Position),
}

impl Action {
    /// The position this action targets.
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Action::Place(p) | Action::Select(p) | Action::Move(p) | Action::Remove(p) => p,
        }
    }

    /// Lowercase verb, used in logs and error messages.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Action::Place(_) => "place",
            Action::Select(_) => "select",
            Action::Move(_) => "move",
            Action::Remove(_) => "remove",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.verb(), self.position())
    }
}
