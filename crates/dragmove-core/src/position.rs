//! Element offset type and anchor arithmetic.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Offset of the element from its positioning origin, in logical pixels.
///
/// Owned and mutated exclusively by the drag controller; the element's
/// visual placement is derived from it on every update.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the origin.
    pub left: f64,
    /// Vertical offset from the origin.
    pub top: f64,
}

impl Position {
    /// Position at the origin.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
    };

    /// Create a position from offsets.
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Anchor for a drag session grabbing the element at `pointer`: the
    /// fixed offset from the pointer to the element, valid for the whole
    /// session.
    pub fn anchor(self, pointer: Point) -> Vec2 {
        Vec2::new(self.left - pointer.x, self.top - pointer.y)
    }

    /// Position of an element tracking `pointer` with the given anchor.
    ///
    /// Pure translation: together with [`Position::anchor`] this makes the
    /// element follow the pointer 1:1 from wherever it was grabbed.
    pub fn tracking(pointer: Point, anchor: Vec2) -> Self {
        Self::new(pointer.x + anchor.x, pointer.y + anchor.y)
    }
}

impl From<Point> for Position {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Position> for Point {
    fn from(position: Position) -> Self {
        Point::new(position.left, position.top)
    }
}
