//! Static board geometry: mill lines and the adjacency graph.

use crate::core::{Position, BOARD_SIZE};

/// Three positions forming a line. Owning all three is a mill.
pub type Mill = [Position; 3];

const fn p(index: u8) -> Position {
    Position::at(index)
}

const fn mill(a: u8, b: u8, c: u8) -> Mill {
    [p(a), p(b), p(c)]
}

/// The 16 lines of the board: four sides of each square, then the four
/// cross lines joining the squares.
pub const MILL_COMBINATIONS: [Mill; 16] = [
    mill(0, 1, 2),
    mill(2, 3, 4),
    mill(4, 5, 6),
    mill(6, 7, 0),
    mill(8, 9, 10),
    mill(10, 11, 12),
    mill(12, 13, 14),
    mill(14, 15, 8),
    mill(16, 17, 18),
    mill(18, 19, 20),
    mill(20, 21, 22),
    mill(22, 23, 16),
    mill(1, 9, 17),
    mill(3, 11, 19),
    mill(5, 13, 21),
    mill(7, 15, 23),
];

/// Neighbors of each position, indexed by position. Symmetric, 2 to 4 entries.
const ADJACENCY: [&[Position]; BOARD_SIZE] = [
    &[p(1), p(7)],
    &[p(0), p(2), p(9)],
    &[p(1), p(3)],
    &[p(2), p(4), p(11)],
    &[p(3), p(5)],
    &[p(4), p(6), p(13)],
    &[p(5), p(7)],
    &[p(0), p(6), p(15)],
    &[p(9), p(15)],
    &[p(1), p(8), p(10), p(17)],
    &[p(9), p(11)],
    &[p(3), p(10), p(12), p(19)],
    &[p(11), p(13)],
    &[p(5), p(12), p(14), p(21)],
    &[p(13), p(15)],
    &[p(7), p(8), p(14), p(23)],
    &[p(17), p(23)],
    &[p(9), p(16), p(18)],
    &[p(17), p(19)],
    &[p(11), p(18), p(20)],
    &[p(19), p(21)],
    &[p(13), p(20), p(22)],
    &[p(21), p(23)],
    &[p(15), p(16), p(22)],
];

/// Positions one slide away from `position`.
#[must_use]
pub fn adjacent(position: Position) -> &'static [Position] {
    ADJACENCY[position.index()]
}

/// Check if two positions are joined by a line segment.
#[must_use]
pub fn are_adjacent(from: Position, to: Position) -> bool {
    adjacent(from).contains(&to)
}

/// Mill lines passing through `position` (always exactly two).
pub fn mills_through(position: Position) -> impl Iterator<Item = &'static Mill> {
    MILL_COMBINATIONS.iter().filter(move |m| m.contains(&position))
}
