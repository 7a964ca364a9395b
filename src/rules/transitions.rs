//! Nine Men's Morris transitions.
//!
//! Each operation takes the current snapshot plus one position and returns
//! the next snapshot, or the rule it violates. Lifecycle effects (phase
//! change, win, auto-skip) are layered on afterwards by `lifecycle::settle`.

use tracing::info;

use super::engine::{GameResult, RulesEngine};
use super::queries::{check_mill_formation, legal_destinations, validate_move};
use crate::core::{Action, GameState, MorrisConfig, Phase, Position, TurnStep};
use crate::error::{ConfigError, RuleViolation};

/// The rules of the game, parameterized by configuration.
#[derive(Clone, Debug, Default)]
pub struct MorrisRules {
    config: MorrisConfig,
}

impl MorrisRules {
    /// Create rules for a validated configuration.
    pub fn new(config: MorrisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Put a piece for the current player on an empty cell.
    pub fn place_piece(&self, state: &GameState, position: Position) -> Result<GameState, RuleViolation> {
        ensure_in_play(state)?;
        ensure_phase(state, Phase::Placing, "place")?;
        ensure_no_mill(state)?;
        if !state.board.is_empty(position) {
            return Err(RuleViolation::Occupied(position));
        }
        let player = state.current_player;
        let max = self.config.max_pieces_per_player;
        if state.placed[player] >= max {
            return Err(RuleViolation::PlacementCapReached { player, max });
        }

        let mut next = state.clone();
        next.board.set(position, Some(player));
        next.placed[player] += 1;
        Ok(close_turn(next, position))
    }

    /// Pick up one of the current player's pieces. Overwrites any earlier
    /// selection.
    pub fn select_piece(&self, state: &GameState, position: Position) -> Result<GameState, RuleViolation> {
        ensure_in_play(state)?;
        ensure_phase(state, Phase::Moving, "select")?;
        ensure_no_mill(state)?;
        let player = state.current_player;
        if !state.board.is_owned_by(position, player) {
            return Err(RuleViolation::NotOwnPiece { position, player });
        }

        let mut next = state.clone();
        next.step = TurnStep::Selected(position);
        Ok(next)
    }

    /// Slide the selected piece one step to `destination`.
    pub fn move_piece(&self, state: &GameState, destination: Position) -> Result<GameState, RuleViolation> {
        ensure_in_play(state)?;
        ensure_phase(state, Phase::Moving, "move")?;
        ensure_no_mill(state)?;
        let from = state.selected().ok_or(RuleViolation::NothingSelected)?;
        let player = state.current_player;
        if !state.board.is_owned_by(from, player) {
            return Err(RuleViolation::NotOwnPiece { position: from, player });
        }
        validate_move(&state.board, from, destination)?;

        let mut next = state.clone();
        next.board.set(from, None);
        next.board.set(destination, Some(player));
        next.step = TurnStep::Idle;
        Ok(close_turn(next, destination))
    }

    /// Take an opponent piece while a mill is pending, then pass the turn.
    pub fn remove_piece(&self, state: &GameState, position: Position) -> Result<GameState, RuleViolation> {
        ensure_in_play(state)?;
        if !state.is_mill_pending() {
            return Err(RuleViolation::NoMillPending);
        }
        let player = state.current_player;
        match state.board.get(position) {
            None => return Err(RuleViolation::EmptyCell(position)),
            Some(owner) if owner == player => return Err(RuleViolation::OwnPiece(position)),
            Some(_) => {}
        }

        let mut next = state.clone();
        next.board.set(position, None);
        next.step = TurnStep::Idle;
        next.current_player = player.opponent();
        info!(%player, %position, "piece removed");
        Ok(next)
    }
}

fn ensure_in_play(state: &GameState) -> Result<(), RuleViolation> {
    if state.is_over() {
        Err(RuleViolation::GameOver)
    } else {
        Ok(())
    }
}

fn ensure_phase(state: &GameState, phase: Phase, action: &'static str) -> Result<(), RuleViolation> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(RuleViolation::WrongPhase {
            action,
            phase: state.phase,
        })
    }
}

fn ensure_no_mill(state: &GameState) -> Result<(), RuleViolation> {
    if state.is_mill_pending() {
        Err(RuleViolation::MillPending)
    } else {
        Ok(())
    }
}

/// After a piece lands: a mill keeps the turn for a removal, otherwise the
/// turn passes.
fn close_turn(mut next: GameState, landed: Position) -> GameState {
    let player = next.current_player;
    match check_mill_formation(&next.board, landed, player) {
        Some(mill) => {
            info!(%player, positions = ?mill.positions, "mill formed");
            next.step = TurnStep::MillPending(mill);
        }
        None => {
            next.step = TurnStep::Idle;
            next.current_player = player.opponent();
        }
    }
    next
}

impl RulesEngine for MorrisRules {
    fn config(&self) -> &MorrisConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_over() {
            return vec![];
        }

        let board = state.board();
        let player = state.current_player();

        match (state.step(), state.phase()) {
            (TurnStep::MillPending(_), _) => board.pieces_of(player.opponent()).map(Action::Remove).collect(),
            (_, Phase::Placing) => {
                if state.placed_by(player) < self.config.max_pieces_per_player {
                    board.empty_positions().map(Action::Place).collect()
                } else {
                    vec![]
                }
            }
            (step, Phase::Moving) => {
                let mut actions: Vec<Action> = board.pieces_of(player).map(Action::Select).collect();
                if let TurnStep::Selected(from) = step {
                    actions.extend(legal_destinations(board, *from).into_iter().map(Action::Move));
                }
                actions
            }
        }
    }

    fn apply_action(&self, state: &GameState, action: Action) -> Result<GameState, RuleViolation> {
        match action {
            Action::Place(p) => self.place_piece(state, p),
            Action::Select(p) => self.select_piece(state, p),
            Action::Move(p) => self.move_piece(state, p),
            Action::Remove(p) => self.remove_piece(state, p),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(|winner| GameResult {
            winner,
            loser_pieces: state.board().count(winner.opponent()),
        })
    }
}
