//! Puzzle-rule checks over a board.
//!
//! A board is *valid* when no row, column or shape holds more than `s` stars
//! and no two stars touch. It is *complete* when it is valid and every row,
//! column and shape holds exactly `s` stars.
//!
//! These are the standard Star Battle rules layered on top of the board
//! model, not something the board tracks. Placement primitives never
//! consult them; callers ask explicitly.

use std::fmt;

use starbattle_types::{CellStatus, Coordinate};

use crate::board::Board;
use crate::line::LineKind;

/// A row, column or shape, the units that each need `s` stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Row(usize),
    Column(usize),
    Shape(usize),
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Row(index) => write!(f, "row {index}"),
            Group::Column(index) => write!(f, "column {index}"),
            Group::Shape(index) => write!(f, "shape {index}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooManyStars {
        group: Group,
        stars: usize,
        limit: usize,
    },
    AdjacentStars {
        first: Coordinate,
        second: Coordinate,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooManyStars {
                group,
                stars,
                limit,
            } => write!(f, "{group} holds {stars} stars (limit {limit})"),
            Violation::AdjacentStars { first, second } => {
                write!(f, "stars at {first} and {second} touch")
            }
        }
    }
}

impl Board {
    /// Star count for every row, column and shape, in that order.
    #[must_use]
    pub fn group_star_counts(&self) -> Vec<(Group, usize)> {
        let lines = self.rows().chain(self.columns()).map(|line| {
            let group = match line.kind() {
                LineKind::Row => Group::Row(line.index()),
                LineKind::Column => Group::Column(line.index()),
            };
            (group, line.count(CellStatus::Star))
        });
        let shapes = self.shapes().iter().map(|shape| {
            let stars = shape
                .coords()
                .filter(|coord| {
                    self.cell_from_coord(*coord)
                        .is_ok_and(|cell| cell.status() == CellStatus::Star)
                })
                .count();
            (Group::Shape(shape.index()), stars)
        });
        lines.chain(shapes).collect()
    }

    /// Every broken rule, groups first, then touching star pairs.
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        let limit = self.dimensions().stars_per_line();
        let mut violations: Vec<Violation> = self
            .group_star_counts()
            .into_iter()
            .filter(|(_, stars)| *stars > limit)
            .map(|(group, stars)| Violation::TooManyStars {
                group,
                stars,
                limit,
            })
            .collect();

        let stars: Vec<Coordinate> = self
            .statuses()
            .filter(|(_, status)| *status == CellStatus::Star)
            .map(|(coord, _)| coord)
            .collect();
        for (i, first) in stars.iter().enumerate() {
            for second in &stars[i + 1..] {
                if first.is_adjacent_to(*second) {
                    violations.push(Violation::AdjacentStars {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        violations
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        let required = self.dimensions().stars_per_line();
        self.is_valid()
            && self
                .group_star_counts()
                .iter()
                .all(|(_, stars)| *stars == required)
    }
}
