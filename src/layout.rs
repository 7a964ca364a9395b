//! Drawing data for presentation layers.
//!
//! Coordinates are percentages of a 100x100 view box. None of this affects
//! the rules; it is fixed data a renderer reads alongside `GameState`.

use serde::{Deserialize, Serialize};

use crate::core::BOARD_SIZE;

/// A point in the 100x100 view box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

/// A straight line between two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

const fn pt(x: u8, y: u8) -> Point {
    Point { x, y }
}

const fn seg(x1: u8, y1: u8, x2: u8, y2: u8) -> Segment {
    Segment {
        from: pt(x1, y1),
        to: pt(x2, y2),
    }
}

/// Where each position is drawn, indexed by position.
pub const NODE_COORDINATES: [Point; BOARD_SIZE] = [
    // Outer square
    pt(5, 5),
    pt(50, 5),
    pt(95, 5),
    pt(95, 50),
    pt(95, 95),
    pt(50, 95),
    pt(5, 95),
    pt(5, 50),
    // Middle square
    pt(20, 20),
    pt(50, 20),
    pt(80, 20),
    pt(80, 50),
    pt(80, 80),
    pt(50, 80),
    pt(20, 80),
    pt(20, 50),
    // Inner square
    pt(35, 35),
    pt(50, 35),
    pt(65, 35),
    pt(65, 50),
    pt(65, 65),
    pt(50, 65),
    pt(35, 65),
    pt(35, 50),
];

/// Sides of the three concentric squares.
pub const BOARD_LINES: [Segment; 12] = [
    seg(5, 5, 95, 5),
    seg(5, 5, 5, 95),
    seg(5, 95, 95, 95),
    seg(95, 5, 95, 95),
    seg(20, 20, 80, 20),
    seg(20, 20, 20, 80),
    seg(20, 80, 80, 80),
    seg(80, 20, 80, 80),
    seg(35, 35, 65, 35),
    seg(35, 35, 35, 65),
    seg(35, 65, 65, 65),
    seg(65, 35, 65, 65),
];

/// Cross lines joining the squares at their midpoints.
pub const DIVIDER_LINES: [Segment; 4] = [
    seg(5, 50, 35, 50),
    seg(65, 50, 95, 50),
    seg(50, 5, 50, 35),
    seg(50, 65, 50, 95),
];

impl Segment {
    /// Check if `point` lies on this (axis-aligned) segment.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let (lo_x, hi_x) = (self.from.x.min(self.to.x), self.from.x.max(self.to.x));
        let (lo_y, hi_y) = (self.from.y.min(self.to.y), self.from.y.max(self.to.y));
        (lo_x..=hi_x).contains(&point.x) && (lo_y..=hi_y).contains(&point.y)
    }
}

/// Every segment a renderer draws.
pub fn all_segments() -> impl Iterator<Item = &'static Segment> {
    BOARD_LINES.iter().chain(DIVIDER_LINES.iter())
}
