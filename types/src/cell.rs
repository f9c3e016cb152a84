//! Cell status state machine.
//!
//! ```text
//! Blank ──dot()──▶ Dot  ──dot()──▶ Dot
//!   │
//!   └──star()──▶ Star ──star()──▶ Star
//! ```
//!
//! `Dot → Star` and `Star → Dot` are rejected. Nothing in this crate
//! removes a dot or a star once placed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BoardDimensions, Coordinate, Probability};

/// The three possible statuses for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    #[default]
    Blank,
    Dot,
    Star,
}

impl CellStatus {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            CellStatus::Blank => '.',
            CellStatus::Dot => 'x',
            CellStatus::Star => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("cannot star {0}: the cell is already dotted")]
    Dotted(Coordinate),
    #[error("cannot dot {0}: the cell already holds a star")]
    Starred(Coordinate),
    #[error("cell {0} carries no star probability")]
    NotProbabilistic(Coordinate),
    #[error("cell {0} is already resolved; its belief is fixed")]
    Resolved(Coordinate),
}

/// A single grid position.
///
/// Deterministic boards hold cells without a probability; probabilistic boards
/// hold cells that carry a `p_star` belief. Both share this one type so that
/// row and column views stay homogeneous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coordinate,
    status: CellStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    p_star: Option<Probability>,
}

impl Cell {
    #[must_use]
    pub const fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            status: CellStatus::Blank,
            p_star: None,
        }
    }

    #[must_use]
    pub const fn probabilistic(coord: Coordinate, p_star: Probability) -> Self {
        Self {
            coord,
            status: CellStatus::Blank,
            p_star: Some(p_star),
        }
    }

    #[must_use]
    pub const fn coord(&self) -> Coordinate {
        self.coord
    }

    #[must_use]
    pub const fn status(&self) -> CellStatus {
        self.status
    }

    #[must_use]
    pub const fn row_index(&self) -> i32 {
        self.coord.y
    }

    #[must_use]
    pub const fn column_index(&self) -> i32 {
        self.coord.x
    }

    #[must_use]
    pub const fn is_probabilistic(&self) -> bool {
        self.p_star.is_some()
    }

    #[must_use]
    pub const fn p_star(&self) -> Option<Probability> {
        self.p_star
    }

    #[must_use]
    pub fn p_dot(&self) -> Option<Probability> {
        self.p_star.map(Probability::complement)
    }

    /// `(x, y, p_star)` for a probabilistic cell.
    #[must_use]
    pub fn sample(&self) -> Option<(i32, i32, f64)> {
        self.p_star
            .map(|p| (self.coord.x, self.coord.y, p.value()))
    }

    /// Replace the belief held by a blank probabilistic cell.
    ///
    /// A dotted or starred cell keeps its collapsed belief.
    pub fn set_p_star(&mut self, p_star: Probability) -> Result<(), CellError> {
        if self.p_star.is_none() {
            return Err(CellError::NotProbabilistic(self.coord));
        }
        if self.status != CellStatus::Blank {
            return Err(CellError::Resolved(self.coord));
        }
        self.p_star = Some(p_star);
        Ok(())
    }

    /// The 8-neighbourhood clipped to the board edges.
    #[must_use]
    pub fn adjacent_coords(&self, dims: BoardDimensions) -> Vec<Coordinate> {
        self.coord
            .neighbours()
            .into_iter()
            .filter(|coord| coord.is_within_board(dims))
            .collect()
    }

    /// Mark the cell as holding no star. Idempotent.
    pub fn dot(&mut self) -> Result<(), CellError> {
        match self.status {
            CellStatus::Star => Err(CellError::Starred(self.coord)),
            CellStatus::Blank | CellStatus::Dot => {
                self.status = CellStatus::Dot;
                self.collapse(Probability::ZERO);
                Ok(())
            }
        }
    }

    /// Place a star on this cell only. Neighbours are untouched; cascading
    /// placement needs the whole board and lives there.
    pub fn star(&mut self) -> Result<(), CellError> {
        match self.status {
            CellStatus::Dot => Err(CellError::Dotted(self.coord)),
            CellStatus::Blank | CellStatus::Star => {
                self.status = CellStatus::Star;
                self.collapse(Probability::ONE);
                Ok(())
            }
        }
    }

    fn collapse(&mut self, certainty: Probability) {
        if self.p_star.is_some() {
            self.p_star = Some(certainty);
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.p_star {
            Some(p) => write!(f, "Cell{}[{}]", self.coord, p),
            None => write!(f, "Cell{}", self.coord),
        }
    }
}
