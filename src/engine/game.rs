//! The game engine: sole owner of the current snapshot.
//!
//! Drivers call the operations below and re-read `state()` afterwards. Every
//! accepted transition is followed by the lifecycle post-checks, so the
//! snapshot a driver sees is always settled.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::core::{Action, GameState, MorrisConfig, Position};
use crate::error::{ConfigError, RuleViolation};
use crate::rules::{lifecycle, GameResult, MorrisRules, RulesEngine};

/// Owns one game session.
///
/// ```
/// use morris_engine::GameEngine;
///
/// let mut engine = GameEngine::new();
/// assert!(engine.place_piece(0));
/// assert!(!engine.place_piece(0)); // occupied
/// assert_eq!(engine.state().board().piece_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    rules: MorrisRules,
    state: GameState,
}

/// Builder for a `GameEngine` with a non-standard configuration.
#[derive(Clone, Debug, Default)]
pub struct GameEngineBuilder {
    config: MorrisConfig,
}

impl GameEngineBuilder {
    /// Start from the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pieces each player places.
    #[must_use]
    pub fn max_pieces_per_player(mut self, max: u8) -> Self {
        self.config.max_pieces_per_player = max;
        self
    }

    /// Set the losing piece-count threshold.
    #[must_use]
    pub fn min_pieces_to_lose(mut self, min: u8) -> Self {
        self.config.min_pieces_to_lose = min;
        self
    }

    /// Set how long drivers should show the skip notice.
    #[must_use]
    pub fn skip_message_duration(mut self, duration: Duration) -> Self {
        self.config = self.config.with_skip_message_duration(duration);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: MorrisConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and start a new game.
    pub fn build(self) -> Result<GameEngine, ConfigError> {
        GameEngine::with_config(self.config)
    }
}

impl GameEngine {
    /// Start a standard game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a game.
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    /// Start a game with the given configuration.
    pub fn with_config(config: MorrisConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: MorrisRules::new(config)?,
            state: GameState::new(),
        })
    }

    /// Resume from an existing snapshot. The snapshot is taken as-is; call
    /// [`run_turn_checks`](Self::run_turn_checks) to settle it.
    ///
    /// Only the configuration is validated. Transitions still reject a
    /// selection that does not hold a piece of the player to move.
    pub fn from_state(config: MorrisConfig, state: GameState) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: MorrisRules::new(config)?,
            state,
        })
    }

    /// Read-only view of the current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MorrisConfig {
        self.rules.config()
    }

    /// Get the rules.
    #[must_use]
    pub fn rules(&self) -> &MorrisRules {
        &self.rules
    }

    /// Place a piece for the current player. Returns false if rejected.
    pub fn place_piece(&mut self, position: usize) -> bool {
        self.try_place_piece(position).is_ok()
    }

    /// Select one of the current player's pieces. Returns false if rejected.
    pub fn select_piece(&mut self, position: usize) -> bool {
        self.try_select_piece(position).is_ok()
    }

    /// Move the selected piece. A rejected move also clears the selection.
    pub fn move_piece(&mut self, position: usize) -> bool {
        self.try_move_piece(position).is_ok()
    }

    /// Remove an opponent piece after a mill. Returns false if rejected.
    pub fn remove_piece(&mut self, position: usize) -> bool {
        self.try_remove_piece(position).is_ok()
    }

    pub fn try_place_piece(&mut self, position: usize) -> Result<(), RuleViolation> {
        self.submit(Action::Place, position)
    }

    pub fn try_select_piece(&mut self, position: usize) -> Result<(), RuleViolation> {
        self.submit(Action::Select, position)
    }

    pub fn try_move_piece(&mut self, position: usize) -> Result<(), RuleViolation> {
        self.submit(Action::Move, position)
    }

    pub fn try_remove_piece(&mut self, position: usize) -> Result<(), RuleViolation> {
        self.submit(Action::Remove, position)
    }

    fn submit(&mut self, make: fn(Position) -> Action, index: usize) -> Result<(), RuleViolation> {
        let position = Position::try_from(index)
            .inspect_err(|violation| debug!(index, %violation, "rejected off-board input"))?;
        self.apply(make(position))
    }

    /// Apply one action and settle the result.
    ///
    /// On success the snapshot is replaced in one step. On failure it is left
    /// alone, except that a rejected move drops the selection.
    #[instrument(skip(self), fields(player = %self.state.current_player(), phase = %self.state.phase()))]
    pub fn apply(&mut self, action: Action) -> Result<(), RuleViolation> {
        match self.rules.apply_action(&self.state, action) {
            Ok(next) => {
                self.state = lifecycle::settle(next, self.rules.config());
                Ok(())
            }
            Err(violation) => {
                debug!(%violation, "rejected");
                if matches!(action, Action::Move(_)) && violation.clears_selection() {
                    self.state = self.state.without_selection();
                }
                Err(violation)
            }
        }
    }

    /// Run the post-checks (phase change, win, auto-skip) on the current
    /// snapshot without applying an action.
    pub fn run_turn_checks(&mut self) {
        let current = std::mem::take(&mut self.state);
        self.state = lifecycle::settle(current, self.rules.config());
    }

    /// Drop the skip notice. The driver calls this when its display timer
    /// (see [`MorrisConfig::skip_message_duration`]) expires.
    pub fn clear_skip_message(&mut self) {
        if self.state.skip_message().is_some() {
            self.state = self.state.without_skip_message();
        }
    }

    /// Discard the current game and start over with the same configuration.
    pub fn new_game(&mut self) {
        debug!("starting new game");
        self.state = GameState::new();
    }

    /// Every action the current player may take.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }
}
