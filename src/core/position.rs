//! Board position identifiers.
//!
//! The board has 24 points arranged as three concentric squares. Each square
//! is numbered clockwise from its top-left corner:
//!
//! ```text
//! 0-----------1-----------2
//! |           |           |
//! |   8-------9------10   |
//! |   |       |       |   |
//! |   |  16--17--18   |   |
//! |   |   |       |   |   |
//! 7--15--23      19--11---3
//! |   |   |       |   |   |
//! |   |  22--21--20   |   |
//! |   |       |       |   |
//! |  14------13------12   |
//! |           |           |
//! 6-----------5-----------4
//! ```
//!
//! Drivers hand the engine plain integers; `Position::try_from` rejects
//! anything off the board with `RuleViolation::OffBoard`.

use serde::{Deserialize, Serialize};

use super::config::BOARD_SIZE;
use crate::error::RuleViolation;
use crate::layout::{Point, NODE_COORDINATES};

/// A point on the board, always in `0..24`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Create a position, or `None` if `index` is off the board.
    ///
    /// ```
    /// use morris_engine::core::Position;
    ///
    /// assert_eq!(Position::new(23).map(|p| p.index()), Some(23));
    /// assert!(Position::new(24).is_none());
    /// ```
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < BOARD_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Const constructor for the static tables. Panics at compile time when
    /// used in a const item with an out-of-range index.
    pub(crate) const fn at(index: u8) -> Self {
        assert!((index as usize) < BOARD_SIZE, "position out of range");
        Self(index)
    }

    /// Get the 0-based cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 24 positions in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).map(Position)
    }

    /// Drawing coordinates of this point (percent of a 100x100 view box).
    #[must_use]
    pub fn coordinates(self) -> Point {
        NODE_COORDINATES[self.index()]
    }
}

impl TryFrom<usize> for Position {
    type Error = RuleViolation;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(Position::new)
            .ok_or(RuleViolation::OffBoard(index))
    }
}

impl TryFrom<u8> for Position {
    type Error = RuleViolation;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Position::new(index).ok_or(RuleViolation::OffBoard(index as usize))
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
