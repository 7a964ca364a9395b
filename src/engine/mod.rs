//! Driver-facing engine.
//!
//! `GameEngine` owns the current snapshot and is the only thing that replaces
//! it. Presentation layers call its operations (or `handle_click`) and re-read
//! the state afterwards.

pub mod game;
pub mod input;

pub use game::{GameEngine, GameEngineBuilder};
pub use input::route_click;
