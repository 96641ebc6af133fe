//! Grid coordinates and the Moore neighborhood offsets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 8 Moore offsets, (0, 0) excluded. Ordered so that neighbors of a
/// tile come out in ascending `(x, y)` order.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Integer board position. Ordering is lexicographic on `(x, y)`, which is
/// the canonical visiting order for interactions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Iterator over the 8 surrounding positions, unbounded.
    pub fn moore(self) -> impl Iterator<Item = Coord> {
        MOORE_OFFSETS.iter().map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moore_excludes_center_and_is_sorted() {
        let c = Coord::new(4, 7);
        let around: Vec<Coord> = c.moore().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&c));
        let mut sorted = around.clone();
        sorted.sort();
        assert_eq!(around, sorted);
    }

    #[test]
    fn ordering_is_x_then_y() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
        assert!(Coord::new(2, 1) < Coord::new(2, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(3, -1).to_string(), "(3,-1)");
    }
}
