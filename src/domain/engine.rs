//! The generation-stepping engine.
//!
//! `GridEngine` owns two same-shaped grids. Each step reads only from the
//! current one, writes every cell of the other, then swaps them, so no cell
//! ever sees a neighbor that was already updated in the same generation.

use std::iter::FusedIterator;

use tracing::{debug, info, warn};

use super::{BoundaryMode, Cell, Dimensions, Grid, OutOfBoundsPolicy, Pattern};
use crate::error::{Error, Result};

/// Moore neighborhood offsets as (row, col)
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 1),
    (0, 1),
    (1, 0),
    (-1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (1, -1),
];

pub struct GridEngine {
    current: Grid,
    next: Grid,
    boundary: BoundaryMode,
    generation: u64,
}

impl GridEngine {
    /// Build an engine with the default out-of-bounds policy (skip).
    pub fn new(
        dimensions: (isize, isize),
        pattern: &Pattern,
        boundary: BoundaryMode,
    ) -> Result<Self> {
        Self::with_policy(dimensions, pattern, boundary, OutOfBoundsPolicy::default())
    }

    /// Build an engine, choosing what happens to pattern cells that fall
    /// off a bounded grid. Nothing is written if the pattern is rejected.
    pub fn with_policy(
        (rows, cols): (isize, isize),
        pattern: &Pattern,
        boundary: BoundaryMode,
        policy: OutOfBoundsPolicy,
    ) -> Result<Self> {
        let dimensions = Dimensions::new(rows, cols)?;

        let mut placed = Vec::with_capacity(pattern.cells.len());
        for &(row, col) in &pattern.cells {
            match boundary.resolve(dimensions, row, col) {
                Some(position) => placed.push(position),
                None if policy == OutOfBoundsPolicy::Reject => {
                    return Err(Error::PatternOutOfBounds {
                        row,
                        col,
                        rows: dimensions.rows(),
                        cols: dimensions.cols(),
                    });
                }
                None => warn!(pattern = pattern.name, row, col, "skipping cell outside grid"),
            }
        }

        let mut current = Grid::new(dimensions);
        for (row, col) in placed {
            current.set(row, col, Cell::Alive);
        }

        info!(
            rows = dimensions.rows(),
            cols = dimensions.cols(),
            boundary = boundary.name(),
            pattern = pattern.name,
            extent = ?pattern.extent(),
            population = current.population(),
            "grid engine initialized"
        );

        Ok(Self {
            next: Grid::new(dimensions),
            current,
            boundary,
            generation: 0,
        })
    }

    /// The current generation
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn dimensions(&self) -> Dimensions {
        self.current.dimensions()
    }

    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Number of steps taken since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count live cells in the Moore neighborhood of `position`.
    ///
    /// On a torus the position and every neighbor wrap around the edges.
    /// On a bounded grid neighbors beyond the edge count as dead.
    pub fn count_neighbors(&self, (row, col): (isize, isize)) -> u8 {
        let dimensions = self.dimensions();
        let (row, col) = match self.boundary {
            BoundaryMode::Toroidal => {
                let (r, c) = dimensions.wrapped(row, col);
                (r as isize, c as isize)
            }
            BoundaryMode::Bounded => (row, col),
        };

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                // An offset that leaves the isize range is off any grid.
                let (r, c) = (row.checked_add(dr)?, col.checked_add(dc)?);
                self.boundary.resolve(dimensions, r, c)
            })
            .filter(|&(r, c)| self.current.is_alive(r, c))
            .count() as u8
    }

    /// Step one generation and return the new current grid.
    pub fn advance(&mut self) -> &Grid {
        let dimensions = self.dimensions();

        for row in 0..dimensions.rows() {
            for col in 0..dimensions.cols() {
                let neighbors = self.count_neighbors((row as isize, col as isize));
                let (r, c) = match self.boundary {
                    BoundaryMode::Toroidal => dimensions.wrapped(row as isize, col as isize),
                    BoundaryMode::Bounded => (row, col),
                };
                let current = self.current.get(r, c).unwrap_or_default();
                self.next.set(r, c, current.evolve(neighbors));
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.current.population(),
            "advanced"
        );

        &self.current
    }

    /// Lazily step `iterations` generations, yielding a snapshot of each.
    pub fn produce_sequence(&mut self, iterations: usize) -> Generations<'_> {
        Generations {
            engine: self,
            remaining: iterations,
        }
    }
}

/// Finite sequence of generations; each pull advances the engine once.
pub struct Generations<'a> {
    engine: &'a mut GridEngine,
    remaining: usize,
}

impl Generations<'_> {
    /// Generation number of the most recently yielded grid
    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    pub fn boundary(&self) -> BoundaryMode {
        self.engine.boundary()
    }
}

impl Iterator for Generations<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.engine.advance().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Generations<'_> {}

impl FusedIterator for Generations<'_> {}
