mod boundary;
mod cell;
mod engine;
mod grid;
mod patterns;

pub use boundary::{BoundaryMode, OutOfBoundsPolicy};
pub use cell::Cell;
pub use engine::{Generations, GridEngine};
pub use grid::{Dimensions, Grid};
pub use patterns::{Pattern, PatternLibrary, SOUP_PATTERN, presets};
