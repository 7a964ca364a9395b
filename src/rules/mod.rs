//! Rules of Nine Men's Morris.
//!
//! - `tables`: static mill lines and adjacency graph
//! - `queries`: pure facts derived from a board (mills, moves, winner)
//! - `engine`: the `RulesEngine` trait
//! - `transitions`: `MorrisRules`, the place/select/move/remove transitions
//! - `lifecycle`: ordered post-checks run after each accepted transition

pub mod engine;
pub mod lifecycle;
pub mod queries;
pub mod tables;
pub mod transitions;

pub use engine::{GameResult, RulesEngine};
pub use lifecycle::{settle, skip_notice};
pub use queries::{
    can_transition_to_moving, check_mill_formation, check_win_condition, has_valid_moves, legal_destinations,
    validate_move,
};
pub use tables::{adjacent, are_adjacent, mills_through, Mill, MILL_COMBINATIONS};
pub use transitions::MorrisRules;
