//! Row and column views.
//!
//! A line is an `{kind, index}` pair resolved against the board's arena on
//! every access. It never owns or copies cells.

use std::fmt;
use std::ops::Index;

use starbattle_types::{Cell, CellStatus, Coordinate};

use crate::board::{Board, BoardError, Cascade};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
}

impl LineKind {
    /// Coordinate of the cell at `position` along line `index`.
    #[must_use]
    pub const fn coord(self, index: usize, position: usize) -> Coordinate {
        match self {
            LineKind::Row => Coordinate::new(position as i32, index as i32),
            LineKind::Column => Coordinate::new(index as i32, position as i32),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineKind::Row => "row",
            LineKind::Column => "column",
        }
    }
}

/// Read-only view of one row or column.
#[derive(Clone, Copy)]
pub struct LineView<'a> {
    board: &'a Board,
    kind: LineKind,
    index: usize,
}

impl<'a> LineView<'a> {
    pub(crate) fn new(board: &'a Board, kind: LineKind, index: usize) -> Option<Self> {
        (index < board.dimensions().dimension()).then_some(Self { board, kind, index })
    }

    #[must_use]
    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.board.dimensions().dimension()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&'a Cell> {
        if position >= self.len() {
            return None;
        }
        self.board
            .cell_from_coord(self.kind.coord(self.index, position))
            .ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Cell> + '_ {
        (0..self.len()).filter_map(|position| self.get(position))
    }

    #[must_use]
    pub fn count(&self, status: CellStatus) -> usize {
        self.iter().filter(|cell| cell.status() == status).count()
    }
}

impl Index<usize> for LineView<'_> {
    type Output = Cell;

    fn index(&self, position: usize) -> &Self::Output {
        match self.get(position) {
            Some(cell) => cell,
            None => panic!(
                "position {position} out of range for {} of length {}",
                self.kind.as_str(),
                self.len()
            ),
        }
    }
}

impl fmt::Debug for LineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Row => write!(f, "Row({})", self.index),
            LineKind::Column => write!(f, "Column({})", self.index),
        }
    }
}

/// Mutable view of one row or column. Placements made through it go through
/// the board, so cascades still reach cells outside the line.
pub struct LineViewMut<'a> {
    board: &'a mut Board,
    kind: LineKind,
    index: usize,
}

impl<'a> LineViewMut<'a> {
    pub(crate) fn new(board: &'a mut Board, kind: LineKind, index: usize) -> Option<Self> {
        (index < board.dimensions().dimension()).then_some(Self { board, kind, index })
    }

    fn coord(&self, position: usize) -> Result<Coordinate, BoardError> {
        let coord = self.kind.coord(self.index, position);
        if position >= self.board.dimensions().dimension() {
            return Err(BoardError::CellNotFound(coord));
        }
        Ok(coord)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Cell> {
        let coord = self.coord(position).ok()?;
        self.board.cell_mut(coord).ok()
    }

    pub fn dot(&mut self, position: usize) -> Result<(), BoardError> {
        let coord = self.coord(position)?;
        self.board.dot(coord)
    }

    pub fn star(&mut self, position: usize, cascade: Cascade) -> Result<(), BoardError> {
        let coord = self.coord(position)?;
        self.board.star(coord, cascade)
    }

    #[must_use]
    pub fn as_view(&self) -> LineView<'_> {
        LineView {
            board: &*self.board,
            kind: self.kind,
            index: self.index,
        }
    }
}
