//! Core domain types for Star Battle boards.
//!
//! This crate contains pure value types with no IO and minimal dependencies:
//! coordinates, cells and their status state machine, star probabilities,
//! shapes, and the board dimensions every other type is measured against.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod cell;
mod coord;
mod dimensions;
mod probability;
mod shape;

pub use cell::{Cell, CellError, CellStatus};
pub use coord::Coordinate;
pub use dimensions::{BoardDimensions, DimensionsError};
pub use probability::{Probability, ProbabilityError};
pub use shape::{Shape, ShapeDefinition};
