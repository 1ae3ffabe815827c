use super::Cell;
use crate::error::{Error, Result};

/// Number of rows and columns of a simulation, fixed once created.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
    area: usize,
}

impl Dimensions {
    /// Validate a signed (rows, cols) pair. Both must be positive and the
    /// cell count must fit in `isize`.
    pub fn new(rows: isize, cols: isize) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        let area = (rows as usize)
            .checked_mul(cols as usize)
            .filter(|&area| area <= isize::MAX as usize)
            .ok_or(Error::InvalidDimensions { rows, cols })?;

        Ok(Self {
            rows: rows as usize,
            cols: cols as usize,
            area,
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.area
    }

    /// Map a signed position into range, or `None` when it lies outside.
    pub fn checked(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        let in_range = row >= 0
            && col >= 0
            && (row as usize) < self.rows
            && (col as usize) < self.cols;
        in_range.then(|| (row as usize, col as usize))
    }

    /// Wrap a signed position onto the torus.
    pub fn wrapped(&self, row: isize, col: isize) -> (usize, usize) {
        (
            row.rem_euclid(self.rows as isize) as usize,
            col.rem_euclid(self.cols as isize) as usize,
        )
    }
}

/// Grid holds one generation of cells, row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::Dead; dimensions.area()],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.dimensions.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.dimensions.rows && col < self.dimensions.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.dimensions.rows && col < self.dimensions.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Whether the cell at position is alive. Out-of-range reads are dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Iterate rows top to bottom, each as a slice of cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dimensions.cols)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.dimensions.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }

    /// Positions of every live cell, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
