//! Core engine types: players, positions, board, actions, configuration, state.
//!
//! This module is the data model only. Rules live in `rules`; the
//! driver-facing owner of the state lives in `engine`.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod position;
pub mod state;

pub use action::Action;
pub use board::Board;
pub use config::{
    MorrisConfig, BOARD_SIZE, MAX_PIECES_PER_PLAYER, MIN_PIECES_TO_LOSE, SKIP_MESSAGE_DURATION,
};
pub use player::{Player, PlayerMap};
pub use position::Position;
pub use state::{GameState, MillFormation, Phase, TurnStep};
