//! Console renderer: one line per row, one glyph per cell.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::config::SimulationConfig;
use crate::domain::{Cell, Grid};
use crate::error::Result;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct TextRenderer<W: Write> {
    out: W,
    alive_glyph: String,
    dead_glyph: String,
    frame_delay: Duration,
    clear_screen: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            alive_glyph: "0".to_string(),
            dead_glyph: "-".to_string(),
            frame_delay: Duration::from_millis(500),
            clear_screen: false,
        }
    }

    pub fn from_config(out: W, config: &SimulationConfig) -> Self {
        Self::new(out)
            .with_glyphs(&config.alive_glyph, &config.dead_glyph)
            .with_frame_delay(config.frame_delay())
            .with_clear_screen(config.clear_screen)
    }

    pub fn with_glyphs(mut self, alive: &str, dead: &str) -> Self {
        self.alive_glyph = alive.to_string();
        self.dead_glyph = dead.to_string();
        self
    }

    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    fn glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Alive => &self.alive_glyph,
            Cell::Dead => &self.dead_glyph,
        }
    }

    /// Write the grid row-major, cells separated by single spaces
    pub fn render(&mut self, grid: &Grid) -> Result<()> {
        for row in grid.rows() {
            let line = row.iter().map(|&cell| self.glyph(cell)).collect::<Vec<_>>().join(" ");
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Render one frame: clear (or separate) then draw and flush
    pub fn render_frame(&mut self, grid: &Grid) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        self.render(grid)?;
        if !self.clear_screen {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Render every generation of `sequence`, pausing between pulls.
    /// Returns the number of generations shown.
    pub fn play(&mut self, sequence: impl Iterator<Item = Grid>) -> Result<u64> {
        let mut shown = 0;
        for grid in sequence {
            self.render_frame(&grid)?;
            shown += 1;
            debug!(generation = shown, "rendered");
            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }
        Ok(shown)
    }
}
