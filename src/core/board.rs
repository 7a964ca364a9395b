//! The 24-cell board.
//!
//! A cell is either empty (`None`) or owned by exactly one player. The cell
//! array is fixed-size, so the board always has exactly 24 cells.

use serde::{Deserialize, Serialize};

use super::config::BOARD_SIZE;
use super::player::{Player, PlayerMap};
use super::position::Position;

/// Occupancy of every board position.
///
/// `Board` is `Copy`: transitions build a new board instead of sharing one.
///
/// ```
/// use morris_engine::core::{Board, Player, Position};
///
/// let at = |i| Position::new(i).unwrap();
/// let board: Board = [(at(0), Player::A), (at(9), Player::B)].into_iter().collect();
///
/// assert_eq!(board.get(at(0)), Some(Player::A));
/// assert_eq!(board.count(Player::B), 1);
/// assert!(board.is_empty(at(1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Get the occupant of a position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Player> {
        self.cells[position.index()]
    }

    /// Set the occupant of a position.
    pub fn set(&mut self, position: Position, occupant: Option<Player>) {
        self.cells[position.index()] = occupant;
    }

    /// Check if a position is empty.
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Check if a position holds a piece of `player`.
    #[must_use]
    pub fn is_owned_by(&self, position: Position, player: Player) -> bool {
        self.get(position) == Some(player)
    }

    /// Number of live pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    /// Live piece counts for both players.
    #[must_use]
    pub fn counts(&self) -> PlayerMap<usize> {
        PlayerMap::new(|p| self.count(p))
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Raw cell array, indexed by position.
    #[must_use]
    pub fn cells(&self) -> &[Option<Player>; BOARD_SIZE] {
        &self.cells
    }

    /// Iterate over (Position, occupant) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Player>)> + '_ {
        Position::all().map(move |p| (p, self.get(p)))
    }

    /// Iterate over the positions holding `player`'s pieces.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_owned_by(p, player))
    }

    /// Iterate over the empty positions.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_empty(p))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(Position, Player)> for Board {
    fn from_iter<I: IntoIterator<Item = (Position, Player)>>(iter: I) -> Self {
        let mut board = Board::new();
        for (position, player) in iter {
            board.set(position, Some(player));
        }
        board
    }
}

/// Diagram rows; every `o` is replaced by the next cell in `DIAGRAM_ORDER`.
const DIAGRAM: [&str; 13] = [
    "o-----o-----o",
    "|     |     |",
    "| o---o---o |",
    "| |   |   | |",
    "| | o-o-o | |",
    "| | |   | | |",
    "o-o-o   o-o-o",
    "| | |   | | |",
    "| | o-o-o | |",
    "| |   |   | |",
    "| o---o---o |",
    "|     |     |",
    "o-----o-----o",
];

const DIAGRAM_ORDER: [usize; BOARD_SIZE] = [
    0, 1, 2, 8, 9, 10, 16, 17, 18, 7, 15, 23, 19, 11, 3, 22, 21, 20, 14, 13, 12, 6, 5, 4,
];

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut order = DIAGRAM_ORDER.iter();
        for row in DIAGRAM {
            let line: String = row
                .chars()
                .map(|ch| {
                    if ch != 'o' {
                        return ch;
                    }
                    match order.next().and_then(|&i| self.cells[i]) {
                        Some(Player::A) => 'A',
                        Some(Player::B) => 'B',
                        None => '.',
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
