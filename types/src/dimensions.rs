//! Board size configuration.
//!
//! A `BoardDimensions` value is the proof that the grid size and the
//! stars-per-line count are mutually consistent. Boards take one at
//! construction instead of reading shared constants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Probability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionsError {
    #[error("board dimension must be between 1 and {max} (got {got})")]
    Dimension { got: usize, max: usize },
    #[error("stars per line must be between 1 and the board dimension {dimension} (got {got})")]
    StarsPerLine { got: usize, dimension: usize },
}

#[derive(Deserialize)]
struct RawDimensions {
    dimension: usize,
    stars_per_line: usize,
}

/// Validated `{dimension, stars_per_line}` pair.
///
/// # Invariants
///
/// - `1 <= dimension <= BoardDimensions::MAX_DIMENSION`
/// - `1 <= stars_per_line <= dimension`
///
/// The upper bound keeps every row representable as a `u32` bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct BoardDimensions {
    dimension: usize,
    stars_per_line: usize,
}

impl BoardDimensions {
    pub const MAX_DIMENSION: usize = u32::BITS as usize;

    /// The 9×9, two-star variant.
    pub const STANDARD: BoardDimensions = BoardDimensions {
        dimension: 9,
        stars_per_line: 2,
    };

    pub fn new(dimension: usize, stars_per_line: usize) -> Result<Self, DimensionsError> {
        if dimension == 0 || dimension > Self::MAX_DIMENSION {
            return Err(DimensionsError::Dimension {
                got: dimension,
                max: Self::MAX_DIMENSION,
            });
        }
        if stars_per_line == 0 || stars_per_line > dimension {
            return Err(DimensionsError::StarsPerLine {
                got: stars_per_line,
                dimension,
            });
        }
        Ok(Self {
            dimension,
            stars_per_line,
        })
    }

    /// Number of cells on a side of the board.
    #[must_use]
    pub const fn dimension(self) -> usize {
        self.dimension
    }

    /// Stars required in each row, column and shape once solved.
    #[must_use]
    pub const fn stars_per_line(self) -> usize {
        self.stars_per_line
    }

    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.dimension * self.dimension
    }

    /// Uniform prior `s / N` before any constraint propagation.
    #[must_use]
    pub fn default_probability(self) -> Probability {
        Probability::ratio(self.stars_per_line, self.dimension)
    }
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<RawDimensions> for BoardDimensions {
    type Error = DimensionsError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.dimension, raw.stars_per_line)
    }
}
