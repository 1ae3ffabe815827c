//! Named starting patterns and the library that serves them.
//!
//! Coordinates are absolute `(row, col)` grid positions. Patterns are plain
//! data: they never depend on the engine that consumes them.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Dimensions;
use crate::error::{Error, Result};

/// Name under which configuration asks for a random soup instead of a preset
pub const SOUP_PATTERN: &str = "soup";

/// Represents a set of cells to switch on at initialization
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<(isize, isize)>,
}

impl Pattern {
    /// Create a new pattern from absolute alive cell coordinates
    pub fn new(
        name: &'static str,
        description: &'static str,
        cells: Vec<(isize, isize)>,
    ) -> Self {
        Self { name, description, cells }
    }

    /// Create a pattern from cells relative to `origin`
    pub fn at(
        name: &'static str,
        description: &'static str,
        origin: (isize, isize),
        cells: &[(isize, isize)],
    ) -> Self {
        let cells = cells
            .iter()
            .map(|&(r, c)| (r + origin.0, c + origin.1))
            .collect();
        Self::new(name, description, cells)
    }

    /// Copy of this pattern shifted by (rows, cols)
    pub fn translated(&self, rows: isize, cols: isize) -> Self {
        Self::at(self.name, self.description, (rows, cols), &self.cells)
    }

    /// Bounding box as (rows, cols) of the occupied area
    pub fn extent(&self) -> (usize, usize) {
        let span = |values: Vec<isize>| match (values.iter().min(), values.iter().max()) {
            (Some(min), Some(max)) => max.abs_diff(*min).saturating_add(1),
            _ => 0,
        };
        (
            span(self.cells.iter().map(|&(r, _)| r).collect()),
            span(self.cells.iter().map(|&(_, c)| c).collect()),
        )
    }

    /// Parse plaintext (`.cells`) data: `O` or `*` alive, `.` dead,
    /// lines starting with `!` are comments.
    pub fn parse_plaintext(
        name: &'static str,
        description: &'static str,
        origin: (isize, isize),
        text: &str,
    ) -> Result<Self> {
        let mut cells = Vec::new();
        let mut row = 0isize;

        for (line_no, line) in text.lines().enumerate() {
            if line.starts_with('!') {
                continue;
            }
            for (col, ch) in line.trim_end().chars().enumerate() {
                match ch {
                    'O' | '*' => cells.push((row, col as isize)),
                    '.' => {}
                    other => {
                        return Err(Error::PatternParse {
                            name: name.to_string(),
                            line: line_no + 1,
                            reason: format!("unexpected character {other:?}"),
                        });
                    }
                }
            }
            row += 1;
        }

        if cells.is_empty() {
            return Err(Error::PatternParse {
                name: name.to_string(),
                line: 0,
                reason: "no live cells".to_string(),
            });
        }

        Ok(Self::at(name, description, origin, &cells))
    }

    /// Random soup covering the whole grid, each cell alive with
    /// probability `density`.
    pub fn random_soup(dimensions: Dimensions, density: f64, seed: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::Config(format!("soup density {density} is outside [0, 1]")));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut cells = Vec::new();
        for row in 0..dimensions.rows() {
            for col in 0..dimensions.cols() {
                if rng.random_bool(density) {
                    cells.push((row as isize, col as isize));
                }
            }
        }

        Ok(Self::new(SOUP_PATTERN, "Random soup", cells))
    }
}

/// Classic Game of Life patterns, positioned for a 20x50 grid
pub mod presets {
    use super::*;

    const GOSPER_GLIDER_GUN: &str = include_str!("gosper_glider_gun.cells");

    /// Glider - simplest spaceship, moves (+1, +1) every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship, moves diagonally (period 4)",
            vec![(6, 6), (6, 7), (6, 8), (5, 8), (4, 7)],
        )
    }

    /// Ten cells in a row, evolves into a pentadecathlon
    pub fn ten_row() -> Pattern {
        Pattern::new(
            "10-row",
            "Becomes a pentadecathlon (period 15)",
            (5..15).map(|col| (10, col)).collect(),
        )
    }

    /// Boat - still life
    pub fn boat() -> Pattern {
        Pattern::new(
            "boat",
            "Still life",
            vec![(6, 6), (5, 7), (7, 7), (7, 8), (6, 8)],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![(10, 10), (10, 9), (9, 10), (11, 10), (9, 11)],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn gosper_glider_gun() -> Result<Pattern> {
        Pattern::parse_plaintext(
            "gosper_glider",
            "Produces gliders (period 30)",
            (1, 1),
            GOSPER_GLIDER_GUN,
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::at("block", "Still life", (5, 5), &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::at("blinker", "Oscillator (period 2)", (5, 5), &[(1, 0), (1, 1), (1, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::at(
            "toad",
            "Oscillator (period 2)",
            (5, 5),
            &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::at(
            "beacon",
            "Oscillator (period 2)",
            (5, 5),
            &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
        )
    }

    /// Pulsar - period 3 oscillator, symmetric in both axes
    pub fn pulsar() -> Pattern {
        static BARS: [isize; 4] = [0, 5, 7, 12];
        static SPANS: [isize; 6] = [2, 3, 4, 8, 9, 10];

        let cells: Vec<_> = BARS
            .iter()
            .flat_map(|&r| SPANS.iter().map(move |&c| (r, c)))
            .chain(SPANS.iter().flat_map(|&r| BARS.iter().map(move |&c| (r, c))))
            .collect();
        Pattern::at("pulsar", "Oscillator (period 3)", (3, 3), &cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::at(
            "lwss",
            "Lightweight Spaceship (period 4)",
            (5, 5),
            &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::at(
            "acorn",
            "Methuselah - stabilizes at gen 5206",
            (8, 20),
            &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Result<Vec<Pattern>> {
        Ok(vec![
            ten_row(),
            boat(),
            glider(),
            gosper_glider_gun()?,
            r_pentomino(),
            block(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            acorn(),
        ])
    }
}

/// Name-indexed collection of patterns, in registration order
#[derive(Clone, Debug, Default)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library preloaded with every preset
    pub fn standard() -> Result<Self> {
        let mut library = Self::new();
        for pattern in presets::all_patterns()? {
            library.insert(pattern);
        }
        Ok(library)
    }

    /// Register a pattern, replacing any existing one with the same name
    pub fn insert(&mut self, pattern: Pattern) {
        match self.patterns.iter_mut().find(|p| p.name == pattern.name) {
            Some(existing) => *existing = pattern,
            None => self.patterns.push(pattern),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Pattern> {
        self.patterns
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.name)
    }
}
