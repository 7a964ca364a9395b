//! # morris-engine
//!
//! A rules engine for Nine Men's Morris.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not observers**: every operation reads one immutable
//!    `GameState` and produces the next. The engine swaps it in atomically.
//!
//! 2. **Explicit post-checks**: after each accepted transition the engine runs
//!    phase change, win check, and auto-skip in that order.
//!
//! 3. **Rejection, not failure**: illegal inputs return a `RuleViolation`
//!    (or `false`) and leave the game as it was.
//!
//! ## Modules
//!
//! - `core`: Players, positions, board, actions, configuration, state
//! - `rules`: Mill/adjacency tables, derived queries, transitions, lifecycle
//! - `engine`: `GameEngine`, the owner of a game session, and click routing
//! - `layout`: Drawing coordinates and line segments for front ends
//! - `error`: Rule violations and configuration errors
//!
//! ## Example
//!
//! ```
//! use morris_engine::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.place_piece(0); // A
//! engine.place_piece(2); // B
//! engine.place_piece(1); // A
//!
//! let state = engine.state();
//! assert!(!state.is_mill_pending());
//! assert_eq!(state.current_player(), Player::B);
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod layout;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, GameState, MillFormation, MorrisConfig, Phase, Player, PlayerMap, Position, TurnStep,
};

pub use crate::engine::{route_click, GameEngine, GameEngineBuilder};

pub use crate::error::{ConfigError, RuleViolation};

pub use crate::rules::{GameResult, MorrisRules, RulesEngine};
