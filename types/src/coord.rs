use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BoardDimensions;

/// Offsets of the 8-neighbourhood, in the order adjacency results are reported.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// A grid position.
///
/// The type permits any `(x, y)`, including positions off the board, so that
/// neighbour arithmetic never has to special-case edges. Check
/// [`Coordinate::is_within_board`] before treating one as a cell address.
///
/// Serializes as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build from an `(x, y)` pair. No bounds validation.
    #[must_use]
    pub const fn from_tuple(pair: (i32, i32)) -> Self {
        Self {
            x: pair.0,
            y: pair.1,
        }
    }

    #[must_use]
    pub const fn to_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn is_within_board(self, dims: BoardDimensions) -> bool {
        let n = dims.dimension() as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }

    /// Row-major arena index, or `None` off the board.
    #[must_use]
    pub fn index(self, dims: BoardDimensions) -> Option<usize> {
        self.is_within_board(dims)
            .then(|| self.y as usize * dims.dimension() + self.x as usize)
    }

    /// Inverse of [`Coordinate::index`].
    #[must_use]
    pub fn from_index(index: usize, dims: BoardDimensions) -> Self {
        let n = dims.dimension();
        Self::new((index % n) as i32, (index / n) as i32)
    }

    /// Shifted position, or `None` when either axis leaves the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Surrounding positions in neighbour order, unfiltered by any board.
    /// Positions past the `i32` range are dropped, so fewer than 8 can come back.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Whether `other` touches `self` orthogonally or diagonally.
    #[must_use]
    pub fn is_adjacent_to(self, other: Coordinate) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from(pair: (i32, i32)) -> Self {
        Self::from_tuple(pair)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coord: Coordinate) -> Self {
        coord.to_tuple()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
