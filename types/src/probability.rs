//! Star probability proof type.
//!
//! A `Probability` is only obtainable through validation, so any value you
//! hold lies in the closed interval `[0, 1]`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProbabilityError {
    #[error("probability must be within [0, 1] (got {0})")]
    OutOfRange(f64),
    #[error("probability must be a finite number")]
    NotFinite,
}

/// Belief that a cell holds a star.
///
/// # Invariants
///
/// - `0.0 <= value <= 1.0`
/// - Finite
///
/// Out-of-range input is rejected, never clamped: a bad value signals a
/// caller bug rather than a condition to recover from.
///
/// # Serde
///
/// Serializes as a plain number. Deserialization applies the same range check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Probability = Probability(0.0);
    pub const ONE: Probability = Probability(1.0);

    pub fn new(value: f64) -> Result<Self, ProbabilityError> {
        if !value.is_finite() {
            return Err(ProbabilityError::NotFinite);
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ProbabilityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// `numerator / denominator`, for callers that already guarantee
    /// `numerator <= denominator` and a non-zero denominator.
    pub(crate) fn ratio(numerator: usize, denominator: usize) -> Self {
        debug_assert!(denominator > 0 && numerator <= denominator);
        Self(numerator as f64 / denominator as f64)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// `1 - p`: the belief that the cell holds a dot.
    #[must_use]
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(value: Probability) -> Self {
        value.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
