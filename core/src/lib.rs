//! Star Battle board state model.
//!
//! A [`Board`] owns one arena of cells. Rows and columns are index-based
//! views into it, star placement cascades dots onto neighbours, and a
//! probabilistic board exports a [`ProbabilityField`] for visualization.
//!
//! ```text
//! Board::new(dims, shapes, mode) -> star()/dot() -> num_*() | violations() | probability_field()
//! ```
//!
//! Placement never checks puzzle legality. Ask [`Board::violations`],
//! [`Board::is_valid`] or [`Board::is_complete`] when that matters.

mod board;
mod field;
mod line;
mod render;
mod validity;

pub use board::{Board, BoardError, BoardMode, Cascade};
pub use field::{FieldSample, ProbabilityField, Rgb};
pub use line::{LineKind, LineView, LineViewMut};
pub use validity::{Group, Violation};

pub use starbattle_types::{
    BoardDimensions, Cell, CellError, CellStatus, Coordinate, Probability, Shape, ShapeDefinition,
};
