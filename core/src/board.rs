//! The board: a single arena of cells plus the shapes laid over it.
//!
//! Rows, columns and coordinate lookup all resolve into the same `cells`
//! vector, so a mutation through any path is visible through every other.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use starbattle_types::{
    BoardDimensions, Cell, CellError, CellStatus, Coordinate, Shape, ShapeDefinition,
};

use crate::field::ProbabilityField;
use crate::line::{LineKind, LineView, LineViewMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no cell at {0}")]
    CellNotFound(Coordinate),
    #[error(transparent)]
    Cell(#[from] CellError),
    #[error("a probability field requires a probabilistic board")]
    NotProbabilistic,
}

/// Which kind of cell the board holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardMode {
    /// Plain cells driven by status alone.
    #[default]
    Deterministic,
    /// Every cell carries a `p_star` belief, starting at the uniform prior.
    Probabilistic,
}

/// Whether placing a star also dots its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cascade {
    #[default]
    DotAdjacents,
    Skip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    dims: BoardDimensions,
    mode: BoardMode,
    cells: Vec<Cell>,
    shapes: Vec<Shape>,
}

impl Board {
    pub fn new(
        dims: BoardDimensions,
        shapes: impl IntoIterator<Item = ShapeDefinition>,
        mode: BoardMode,
    ) -> Self {
        let prior = dims.default_probability();
        let cells = (0..dims.cell_count())
            .map(|index| {
                let coord = Coordinate::from_index(index, dims);
                match mode {
                    BoardMode::Deterministic => Cell::new(coord),
                    BoardMode::Probabilistic => Cell::probabilistic(coord, prior),
                }
            })
            .collect();
        let shapes: Vec<Shape> = shapes
            .into_iter()
            .enumerate()
            .map(|(index, definition)| Shape::new(index, definition))
            .collect();

        tracing::debug!(
            dimension = dims.dimension(),
            stars_per_line = dims.stars_per_line(),
            ?mode,
            shapes = shapes.len(),
            "Board built"
        );

        Self {
            dims,
            mode,
            cells,
            shapes,
        }
    }

    /// Blank board with no shapes.
    #[must_use]
    pub fn deterministic(dims: BoardDimensions) -> Self {
        Self::new(dims, Vec::new(), BoardMode::Deterministic)
    }

    /// Board of cells at the uniform prior, with no shapes.
    #[must_use]
    pub fn probabilistic(dims: BoardDimensions) -> Self {
        Self::new(dims, Vec::new(), BoardMode::Probabilistic)
    }

    #[must_use]
    pub const fn dimensions(&self) -> BoardDimensions {
        self.dims
    }

    #[must_use]
    pub const fn mode(&self) -> BoardMode {
        self.mode
    }

    #[must_use]
    pub fn is_probabilistic(&self) -> bool {
        self.mode == BoardMode::Probabilistic
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn cell_from_coord(&self, coord: Coordinate) -> Result<&Cell, BoardError> {
        coord
            .index(self.dims)
            .and_then(|index| self.cells.get(index))
            .ok_or(BoardError::CellNotFound(coord))
    }

    pub fn cell_mut(&mut self, coord: Coordinate) -> Result<&mut Cell, BoardError> {
        coord
            .index(self.dims)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(BoardError::CellNotFound(coord))
    }

    // ========================================================================
    // Line views
    // ========================================================================

    #[must_use]
    pub fn row(&self, index: usize) -> Option<LineView<'_>> {
        LineView::new(self, LineKind::Row, index)
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<LineView<'_>> {
        LineView::new(self, LineKind::Column, index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<LineViewMut<'_>> {
        LineViewMut::new(self, LineKind::Row, index)
    }

    pub fn column_mut(&mut self, index: usize) -> Option<LineViewMut<'_>> {
        LineViewMut::new(self, LineKind::Column, index)
    }

    pub fn rows(&self) -> impl Iterator<Item = LineView<'_>> {
        (0..self.dims.dimension()).filter_map(|index| self.row(index))
    }

    pub fn columns(&self) -> impl Iterator<Item = LineView<'_>> {
        (0..self.dims.dimension()).filter_map(|index| self.column(index))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Cells surrounding `coord`, clipped at the board edges.
    pub fn adjacents(&self, coord: Coordinate) -> Result<Vec<&Cell>, BoardError> {
        let cell = self.cell_from_coord(coord)?;
        cell.adjacent_coords(self.dims)
            .into_iter()
            .map(|neighbour| self.cell_from_coord(neighbour))
            .collect()
    }

    pub fn dot(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        self.cell_mut(coord)?.dot()?;
        Ok(())
    }

    /// Dot every cell adjacent to `coord`.
    ///
    /// Neighbours that already hold a star keep it. Returns how many
    /// neighbours were dotted.
    pub fn dot_adjacents(&mut self, coord: Coordinate) -> Result<usize, BoardError> {
        let neighbours = self.cell_from_coord(coord)?.adjacent_coords(self.dims);
        let mut dotted = 0;
        for neighbour in neighbours {
            let cell = self.cell_mut(neighbour)?;
            if cell.status() == CellStatus::Star {
                tracing::trace!(%coord, %neighbour, "Cascade skipped starred neighbour");
                continue;
            }
            cell.dot()?;
            dotted += 1;
        }
        Ok(dotted)
    }

    /// Place a star at `coord`.
    ///
    /// Line counts and adjacency to existing stars are not checked here;
    /// see [`Board::violations`].
    pub fn star(&mut self, coord: Coordinate, cascade: Cascade) -> Result<(), BoardError> {
        self.cell_mut(coord)?.star()?;
        if cascade == Cascade::DotAdjacents {
            let dotted = self.dot_adjacents(coord)?;
            tracing::debug!(%coord, dotted, "Star placed");
        }
        Ok(())
    }

    // ========================================================================
    // Aggregate queries
    // ========================================================================

    #[must_use]
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.status() == status)
            .count()
    }

    #[must_use]
    pub fn num_blanks(&self) -> usize {
        self.count(CellStatus::Blank)
    }

    #[must_use]
    pub fn num_dots(&self) -> usize {
        self.count(CellStatus::Dot)
    }

    #[must_use]
    pub fn num_stars(&self) -> usize {
        self.count(CellStatus::Star)
    }

    pub fn statuses(&self) -> impl Iterator<Item = (Coordinate, CellStatus)> + '_ {
        self.cells.iter().map(|cell| (cell.coord(), cell.status()))
    }

    /// Per-row bitmask of starred columns: bit `x` of entry `y` is set when
    /// `(x, y)` holds a star.
    #[must_use]
    pub fn star_masks(&self) -> Vec<u32> {
        self.rows()
            .map(|row| {
                row.iter()
                    .filter(|cell| cell.status() == CellStatus::Star)
                    .fold(0u32, |mask, cell| mask | (1 << cell.column_index()))
            })
            .collect()
    }

    pub fn probability_field(&self) -> Result<ProbabilityField, BoardError> {
        if !self.is_probabilistic() {
            return Err(BoardError::NotProbabilistic);
        }
        Ok(ProbabilityField::from_cells(self.dims, &self.cells))
    }
}
