//! Rules engine trait.
//!
//! A rules engine defines:
//! - What actions are legal in a state
//! - How an action turns one snapshot into the next
//! - When the game is over
//!
//! Implementations are pure: `apply_action` never touches the input
//! snapshot, so the caller decides when to swap the result in.

use crate::core::{Action, GameState, MorrisConfig, Player};
use crate::error::RuleViolation;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// Player who reduced the opponent to the losing threshold.
    pub winner: Player,
    /// Pieces the loser has left.
    pub loser_pieces: usize,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }

    /// The losing player.
    #[must_use]
    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty once the game is over
/// - `apply_action`: Must be deterministic and leave `state` untouched
/// - `is_terminal`: Return None while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &MorrisConfig;

    /// Every action the current player may take.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action, producing the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns the violated rule if the action is not allowed in `state`.
    fn apply_action(&self, state: &GameState, action: Action) -> Result<GameState, RuleViolation>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check if a single action is legal.
    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        self.apply_action(state, action).is_ok()
    }
}
