//! Shared helpers for integration tests.

#![allow(dead_code)]

use morris_engine::{Board, GameEngine, GameState, MorrisConfig, Phase, Player, PlayerMap, Position};

/// Install a test-writer subscriber once; `RUST_LOG` controls the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn at(index: u8) -> Position {
    Position::new(index).expect("test position on board")
}

/// Board with A's pieces on `a` and B's on `b`.
pub fn board(a: &[u8], b: &[u8]) -> Board {
    a.iter()
        .map(|&i| (at(i), Player::A))
        .chain(b.iter().map(|&i| (at(i), Player::B)))
        .collect()
}

/// Engine in the Moving phase with all pieces placed.
pub fn moving_engine(a: &[u8], b: &[u8], to_move: Player) -> GameEngine {
    let state = GameState::from_position(board(a, b), to_move, Phase::Moving, PlayerMap::with_value(9));
    GameEngine::from_state(MorrisConfig::default(), state).expect("default config is valid")
}

/// Place pieces alternately starting with A; panics if any placement is rejected.
pub fn place_all(engine: &mut GameEngine, positions: &[usize]) {
    for &p in positions {
        assert!(engine.place_piece(p), "placing at {p} rejected:\n{}", engine.state().board());
    }
}
