//! Edge behavior of the grid.

use serde::{Deserialize, Serialize};

use super::Dimensions;

/// How coordinates beyond the grid edges are interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Cells outside the grid are permanently dead
    Bounded,
    /// Opposite edges are joined, the grid is a torus
    #[default]
    Toroidal,
}

impl BoundaryMode {
    /// Resolve a signed position to a grid cell, or `None` when it falls
    /// off a bounded grid.
    pub fn resolve(self, dimensions: Dimensions, row: isize, col: isize) -> Option<(usize, usize)> {
        match self {
            BoundaryMode::Bounded => dimensions.checked(row, col),
            BoundaryMode::Toroidal => Some(dimensions.wrapped(row, col)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoundaryMode::Bounded => "bounded",
            BoundaryMode::Toroidal => "toroidal",
        }
    }
}

/// What to do with pattern coordinates that fall off a bounded grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsPolicy {
    /// Drop the offending coordinates and place the rest
    #[default]
    Skip,
    /// Fail the whole pattern
    Reject,
}
