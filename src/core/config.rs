//! Game configuration.
//!
//! The standard game uses the constants below. `MorrisConfig` carries them
//! through the engine so variants (e.g. fewer pieces for quick games or
//! tests) can be configured at startup and validated once.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of points on the board.
pub const BOARD_SIZE: usize = 24;

/// Pieces each player places during the Placing phase.
pub const MAX_PIECES_PER_PLAYER: u8 = 9;

/// A player with this many pieces or fewer (but at least one) has lost.
pub const MIN_PIECES_TO_LOSE: u8 = 2;

/// How long a driver should show the skip notice.
pub const SKIP_MESSAGE_DURATION: Duration = Duration::from_millis(3000);

/// Engine configuration.
///
/// ```
/// use morris_engine::core::MorrisConfig;
///
/// let config = MorrisConfig::default().with_max_pieces_per_player(6);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_pieces_per_player, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorrisConfig {
    /// Pieces each player places before the Moving phase begins.
    pub max_pieces_per_player: u8,

    /// Live piece count at or below which a player loses.
    pub min_pieces_to_lose: u8,

    /// Display time for the skip notice, in milliseconds. Driver-owned.
    pub skip_message_duration_ms: u64,
}

impl Default for MorrisConfig {
    fn default() -> Self {
        Self {
            max_pieces_per_player: MAX_PIECES_PER_PLAYER,
            min_pieces_to_lose: MIN_PIECES_TO_LOSE,
            skip_message_duration_ms: duration_ms(SKIP_MESSAGE_DURATION),
        }
    }
}

impl MorrisConfig {
    /// Set the number of pieces each player places.
    #[must_use]
    pub fn with_max_pieces_per_player(mut self, max: u8) -> Self {
        self.max_pieces_per_player = max;
        self
    }

    /// Set the losing piece-count threshold.
    #[must_use]
    pub fn with_min_pieces_to_lose(mut self, min: u8) -> Self {
        self.min_pieces_to_lose = min;
        self
    }

    /// Set how long drivers should show the skip notice.
    #[must_use]
    pub fn with_skip_message_duration(mut self, duration: Duration) -> Self {
        self.skip_message_duration_ms = duration_ms(duration);
        self
    }

    /// Skip notice display time as a `Duration`.
    #[must_use]
    pub fn skip_message_duration(&self) -> Duration {
        Duration::from_millis(self.skip_message_duration_ms)
    }

    /// Check the configuration describes a playable game.
    ///
    /// A player needs at least three pieces to form a mill, and at least one
    /// cell must stay empty after placement: on a full board neither player
    /// can slide and the game could never end.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_on_board = (BOARD_SIZE / 2 - 1) as u8;
        if !(3..=max_on_board).contains(&self.max_pieces_per_player) {
            return Err(ConfigError::Validation(format!(
                "max_pieces_per_player must be in 3..={max_on_board}, got {}",
                self.max_pieces_per_player
            )));
        }
        if self.min_pieces_to_lose == 0 || self.min_pieces_to_lose >= self.max_pieces_per_player {
            return Err(ConfigError::Validation(format!(
                "min_pieces_to_lose must be in 1..{}, got {}",
                self.max_pieces_per_player, self.min_pieces_to_lose
            )));
        }
        Ok(())
    }
}

/// Milliseconds in `duration`, saturating at `u64::MAX`.
fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MorrisConfig::default();
        assert_eq!(config.max_pieces_per_player, 9);
        assert_eq!(config.min_pieces_to_lose, 2);
        assert_eq!(config.skip_message_duration(), Duration::from_millis(3000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = MorrisConfig::default()
            .with_max_pieces_per_player(11)
            .with_min_pieces_to_lose(3)
            .with_skip_message_duration(Duration::from_secs(1));

        assert_eq!(config.max_pieces_per_player, 11);
        assert_eq!(config.min_pieces_to_lose, 3);
        assert_eq!(config.skip_message_duration_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let too_few = MorrisConfig::default().with_max_pieces_per_player(2);
        assert!(too_few.validate().is_err());

        // 12 each would fill all 24 cells and could block both players.
        let full_board = MorrisConfig::default().with_max_pieces_per_player(12);
        assert_eq!(
            full_board.validate().unwrap_err().to_string(),
            "config validation error: max_pieces_per_player must be in 3..=11, got 12"
        );

        let zero_threshold = MorrisConfig::default().with_min_pieces_to_lose(0);
        assert!(zero_threshold.validate().is_err());

        let instant_loss = MorrisConfig::default().with_min_pieces_to_lose(9);
        let err = instant_loss.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: min_pieces_to_lose must be in 1..9, got 9"
        );
    }

    #[test]
    fn test_huge_duration_saturates() {
        let config = MorrisConfig::default().with_skip_message_duration(Duration::MAX);
        assert_eq!(config.skip_message_duration_ms, u64::MAX);
    }
}
