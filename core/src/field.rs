//! Probability field export and its colour mapping.
//!
//! The field is a snapshot: it copies `p_star` out of a probabilistic board
//! and does not track later mutations.

use std::collections::BTreeMap;

use serde::Serialize;

use starbattle_types::{BoardDimensions, Cell, Coordinate, Probability};

/// One `(x, y, p_star)` point of the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSample {
    pub x: i32,
    pub y: i32,
    pub p_star: f64,
}

/// `p_star` for every cell of a probabilistic board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityField {
    dimension: usize,
    samples: Vec<FieldSample>,
}

impl ProbabilityField {
    pub(crate) fn from_cells(dims: BoardDimensions, cells: &[Cell]) -> Self {
        let samples = cells
            .iter()
            .filter_map(Cell::sample)
            .map(|(x, y, p_star)| FieldSample { x, y, p_star })
            .collect();
        Self {
            dimension: dims.dimension(),
            samples,
        }
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in row-major order.
    #[must_use]
    pub fn samples(&self) -> &[FieldSample] {
        &self.samples
    }

    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<f64> {
        self.samples
            .iter()
            .find(|sample| sample.x == coord.x && sample.y == coord.y)
            .map(|sample| sample.p_star)
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<Coordinate, f64> {
        self.samples
            .iter()
            .map(|sample| (Coordinate::new(sample.x, sample.y), sample.p_star))
            .collect()
    }

    /// Heights as a matrix indexed `[y][x]`, the layout surface plots expect.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<f64>> {
        let mut grid = vec![vec![0.0; self.dimension]; self.dimension];
        for sample in &self.samples {
            grid[sample.y as usize][sample.x as usize] = sample.p_star;
        }
        grid
    }
}

/// Linear RGB triple with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const NEUTRAL: Rgb = Rgb {
        red: 0.5,
        green: 0.5,
        blue: 0.5,
    };

    /// Red for "no star", green for "star", interpolated linearly.
    /// Cells without a belief render neutral grey.
    #[must_use]
    pub fn for_probability(p_star: Option<Probability>) -> Self {
        match p_star {
            Some(p) => Rgb {
                red: 1.0 - p.value(),
                green: p.value(),
                blue: 0.0,
            },
            None => Self::NEUTRAL,
        }
    }

    #[must_use]
    pub fn for_cell(cell: &Cell) -> Self {
        Self::for_probability(cell.p_star())
    }
}
