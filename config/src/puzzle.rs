//! Puzzle definitions.
//!
//! Two JSON layouts are accepted.
//!
//! Bitmask layout, where `shapes[i][y]` has bit `x` set for every cell of
//! shape `i` in row `y` (trailing empty rows may be omitted) and `stars[y]`
//! is the solution's mask for row `y`:
//!
//! ```json
//! { "stars": [130, 40, 257], "shapes": [[3, 1, 1], [0, 0, 0, 3]] }
//! ```
//!
//! Explicit layout:
//!
//! ```json
//! { "shapes": [{ "coords": [[0, 0], [1, 0]], "colour": 4 }], "stars": [[1, 0]] }
//! ```
//!
//! Decoding validates that the shapes partition the board: no coordinate
//! outside it, none claimed twice, none left over.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use starbattle_types::{BoardDimensions, Coordinate, ShapeDefinition};

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("puzzle is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("puzzle JSON matches neither the bitmask nor the explicit layout: {0}")]
    Layout(#[source] serde_json::Error),
    #[error("{what} has {rows} rows but the board has {dimension}")]
    TooManyRows {
        what: String,
        rows: usize,
        dimension: usize,
    },
    #[error("{what} row {row} mask {mask} sets columns outside a {dimension}-wide board")]
    MaskOutOfBoard {
        what: String,
        row: usize,
        mask: u32,
        dimension: usize,
    },
    #[error("coordinate {0} lies outside the board")]
    CoordOutOfBoard(Coordinate),
    #[error("coordinate {coord} belongs to both shape {first} and shape {second}")]
    Overlap {
        coord: Coordinate,
        first: usize,
        second: usize,
    },
    #[error("coordinate {0} belongs to no shape")]
    Uncovered(Coordinate),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPuzzle {
    Masks {
        shapes: Vec<Vec<u32>>,
        #[serde(default)]
        stars: Option<Vec<u32>>,
    },
    Explicit {
        shapes: Vec<ShapeDefinition>,
        #[serde(default)]
        stars: Option<Vec<Coordinate>>,
    },
}

/// A decoded puzzle: its shapes and, when the source carries one, its solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    dims: BoardDimensions,
    shapes: Vec<ShapeDefinition>,
    solution: Option<Vec<Coordinate>>,
}

impl PuzzleDefinition {
    pub fn from_json(text: &str, dims: BoardDimensions) -> Result<Self, PuzzleError> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(PuzzleError::Json)?;
        let raw: RawPuzzle = serde_json::from_value(value).map_err(PuzzleError::Layout)?;

        let (shapes, solution) = match raw {
            RawPuzzle::Masks { shapes, stars } => {
                let shapes = shapes
                    .iter()
                    .enumerate()
                    .map(|(index, rows)| {
                        let coords = decode_masks(&format!("shape {index}"), rows, dims)?;
                        Ok(ShapeDefinition::new(coords, index as u32))
                    })
                    .collect::<Result<Vec<_>, PuzzleError>>()?;
                let solution = stars
                    .map(|rows| decode_masks("stars", &rows, dims))
                    .transpose()?;
                (shapes, solution)
            }
            RawPuzzle::Explicit { shapes, stars } => (shapes, stars),
        };

        if let Some(stars) = &solution
            && let Some(outside) = stars.iter().find(|coord| !coord.is_within_board(dims))
        {
            return Err(PuzzleError::CoordOutOfBoard(*outside));
        }
        validate_partition(&shapes, dims)?;

        tracing::debug!(
            shapes = shapes.len(),
            has_solution = solution.is_some(),
            "Puzzle decoded"
        );

        Ok(Self {
            dims,
            shapes,
            solution,
        })
    }

    pub fn load(path: &Path, dims: BoardDimensions) -> Result<Self, PuzzleError> {
        let text = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read puzzle at {:?}: {}", path, source);
            PuzzleError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&text, dims)
    }

    #[must_use]
    pub const fn dimensions(&self) -> BoardDimensions {
        self.dims
    }

    #[must_use]
    pub fn shapes(&self) -> &[ShapeDefinition] {
        &self.shapes
    }

    #[must_use]
    pub fn into_shapes(self) -> Vec<ShapeDefinition> {
        self.shapes
    }

    /// Star coordinates of the bundled solution, row-major for bitmask input.
    #[must_use]
    pub fn solution(&self) -> Option<&[Coordinate]> {
        self.solution.as_deref()
    }
}

fn decode_masks(
    what: &str,
    rows: &[u32],
    dims: BoardDimensions,
) -> Result<Vec<Coordinate>, PuzzleError> {
    let dimension = dims.dimension();
    if rows.len() > dimension {
        return Err(PuzzleError::TooManyRows {
            what: what.to_string(),
            rows: rows.len(),
            dimension,
        });
    }

    let mut coords = Vec::new();
    for (y, &mask) in rows.iter().enumerate() {
        if mask.checked_shr(dimension as u32).unwrap_or(0) != 0 {
            return Err(PuzzleError::MaskOutOfBoard {
                what: what.to_string(),
                row: y,
                mask,
                dimension,
            });
        }
        coords.extend(
            (0..dimension)
                .filter(|x| (mask >> x) & 1 == 1)
                .map(|x| Coordinate::new(x as i32, y as i32)),
        );
    }
    Ok(coords)
}

fn validate_partition(shapes: &[ShapeDefinition], dims: BoardDimensions) -> Result<(), PuzzleError> {
    if shapes.is_empty() {
        return Ok(());
    }

    let mut owners: Vec<Option<usize>> = vec![None; dims.cell_count()];
    for (index, shape) in shapes.iter().enumerate() {
        for &coord in &shape.coords {
            let slot = coord
                .index(dims)
                .ok_or(PuzzleError::CoordOutOfBoard(coord))?;
            match owners[slot] {
                Some(first) if first != index => {
                    return Err(PuzzleError::Overlap {
                        coord,
                        first,
                        second: index,
                    });
                }
                _ => owners[slot] = Some(index),
            }
        }
    }

    match owners.iter().position(Option::is_none) {
        Some(slot) => Err(PuzzleError::Uncovered(Coordinate::from_index(slot, dims))),
        None => Ok(()),
    }
}
