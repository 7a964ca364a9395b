//! Structured error types.
//!
//! The engine has no I/O, so every rejection is a rules violation by the
//! caller. Rejected calls leave the snapshot untouched (a rejected move also
//! drops the selection; see [`RuleViolation::clears_selection`]).

use crate::core::{Phase, Player, Position};

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("position {0} is not on the board")]
    OffBoard(usize),

    #[error("the game is over")]
    GameOver,

    #[error("cannot {action} during the {phase} phase")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("a mill is pending; an opponent piece must be removed first")]
    MillPending,

    #[error("no mill is pending")]
    NoMillPending,

    #[error("position {0} is occupied")]
    Occupied(Position),

    #[error("player {player} has already placed all {max} pieces")]
    PlacementCapReached { player: Player, max: u8 },

    #[error("position {position} does not hold a piece of player {player}")]
    NotOwnPiece { position: Position, player: Player },

    #[error("no piece is selected")]
    NothingSelected,

    #[error("position {to} is not adjacent to {from}")]
    NotAdjacent { from: Position, to: Position },

    #[error("position {0} is empty")]
    EmptyCell(Position),

    #[error("cannot remove own piece at {0}")]
    OwnPiece(Position),
}

impl RuleViolation {
    /// True for the violations that drop the current selection: a rejected
    /// move forces the player to select again.
    #[must_use]
    pub fn clears_selection(&self) -> bool {
        matches!(self, RuleViolation::NotAdjacent { .. } | RuleViolation::Occupied(_))
    }
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
