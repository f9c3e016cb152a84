use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Shape input as supplied by a puzzle definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDefinition {
    pub coords: Vec<Coordinate>,
    pub colour: u32,
}

impl ShapeDefinition {
    #[must_use]
    pub fn new(coords: impl IntoIterator<Item = Coordinate>, colour: u32) -> Self {
        Self {
            coords: coords.into_iter().collect(),
            colour,
        }
    }
}

/// A coloured region of the board.
///
/// Shapes are expected to partition the board. That is established by the
/// puzzle loader; a `Shape` on its own does not know about its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    index: usize,
    cells: BTreeSet<Coordinate>,
    colour: u32,
}

impl Shape {
    #[must_use]
    pub fn new(index: usize, definition: ShapeDefinition) -> Self {
        Self {
            index,
            cells: definition.coords.into_iter().collect(),
            colour: definition.colour,
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn colour(&self) -> u32 {
        self.colour
    }

    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }
}
