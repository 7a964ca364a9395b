//! Game state snapshot.
//!
//! ## GameState
//!
//! One immutable snapshot of the whole game:
//! - Board occupancy
//! - Player to act, phase, placement counters
//! - The turn step (idle, piece selected, or mill pending)
//! - Winner and the transient skip notice
//!
//! Transitions never mutate a snapshot in place; they build the next one and
//! the engine swaps it in atomically. Cloning is cheap: the board is `Copy`
//! and mill highlights live in a persistent `im` set.
//!
//! ## TurnStep
//!
//! Selection and a pending mill are mutually exclusive, so they are one tagged
//! value layered on top of `Phase` instead of independent flags.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::player::{Player, PlayerMap};
use super::position::Position;
use crate::rules::tables::Mill;

/// Game phase. Moves from `Placing` to `Moving` exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players take turns putting pieces on empty cells.
    Placing,
    /// Players slide pieces to adjacent empty cells.
    Moving,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placing => write!(f, "placing"),
            Phase::Moving => write!(f, "moving"),
        }
    }
}

/// Every mill completed by a single placement or move.
///
/// A move can close two lines at once; both are reported for highlighting,
/// but only one removal is granted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MillFormation {
    /// The completed combinations.
    pub mills: SmallVec<[Mill; 2]>,

    /// Union of the positions of all completed combinations.
    pub positions: OrdSet<Position>,
}

impl MillFormation {
    /// Build a formation from the completed combinations.
    #[must_use]
    pub fn new(mills: SmallVec<[Mill; 2]>) -> Self {
        let positions = mills.iter().flatten().copied().collect();
        Self { mills, positions }
    }

    /// Check if a position is part of the formation.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

/// Where the current player is within their turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStep {
    /// Waiting for a place or select.
    #[default]
    Idle,
    /// A piece is picked up and waiting for a destination (Moving phase only).
    Selected(Position),
    /// The current player formed a mill and must remove an opponent piece.
    MillPending(MillFormation),
}

/// Complete game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) phase: Phase,
    pub(crate) placed: PlayerMap<u8>,
    pub(crate) step: TurnStep,
    pub(crate) winner: Option<Player>,
    pub(crate) skip_message: Option<String>,
}

impl GameState {
    /// Create the start-of-game state: empty board, player A to place.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::A,
            phase: Phase::Placing,
            placed: PlayerMap::with_value(0),
            step: TurnStep::Idle,
            winner: None,
            skip_message: None,
        }
    }

    /// Set up an arbitrary position (puzzles, tests, resumed games).
    ///
    /// The step starts idle with no winner or notice; run the engine's turn
    /// checks afterwards to settle phase, winner, and skips.
    #[must_use]
    pub fn from_position(board: Board, current_player: Player, phase: Phase, placed: PlayerMap<u8>) -> Self {
        Self {
            board,
            current_player,
            phase,
            placed,
            ..Self::new()
        }
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pieces placed so far, per player (removals do not decrease it).
    #[must_use]
    pub fn placed(&self) -> &PlayerMap<u8> {
        &self.placed
    }

    /// Pieces placed so far by one player.
    #[must_use]
    pub fn placed_by(&self, player: Player) -> u8 {
        self.placed[player]
    }

    /// Current turn step.
    #[must_use]
    pub fn step(&self) -> &TurnStep {
        &self.step
    }

    /// Selected piece, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        match self.step {
            TurnStep::Selected(p) => Some(p),
            _ => None,
        }
    }

    /// Check if the current player must remove an opponent piece.
    #[must_use]
    pub fn is_mill_pending(&self) -> bool {
        matches!(self.step, TurnStep::MillPending(_))
    }

    /// The pending mill, if any.
    #[must_use]
    pub fn mill(&self) -> Option<&MillFormation> {
        match &self.step {
            TurnStep::MillPending(mill) => Some(mill),
            _ => None,
        }
    }

    /// Positions to highlight for the pending mill (empty when none).
    #[must_use]
    pub fn mill_positions(&self) -> OrdSet<Position> {
        self.mill().map(|m| m.positions.clone()).unwrap_or_default()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The transient skip notice, if one is showing.
    #[must_use]
    pub fn skip_message(&self) -> Option<&str> {
        self.skip_message.as_deref()
    }

    /// Copy of this snapshot with the selection dropped.
    #[must_use]
    pub fn without_selection(&self) -> Self {
        let mut next = self.clone();
        if matches!(next.step, TurnStep::Selected(_)) {
            next.step = TurnStep::Idle;
        }
        next
    }

    /// Copy of this snapshot with the skip notice cleared.
    #[must_use]
    pub fn without_skip_message(&self) -> Self {
        Self {
            skip_message: None,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
