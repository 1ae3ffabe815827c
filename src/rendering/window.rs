use macroquad::prelude::*;

use crate::domain::{BoundaryMode, Dimensions, Grid};

/// Height reserved below the grid for the status line
pub const STATUS_HEIGHT: f32 = 30.0;
/// Gap kept around the grid
pub const MARGIN: f32 = 6.0;

fn alive_color() -> Color {
    Color::from_rgba(105, 139, 105, 255) // DarkSeaGreen4
}

fn dead_color() -> Color {
    Color::from_rgba(205, 200, 177, 255) // cornsilk3
}

/// Screen placement of the cell rectangles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    pub cell_size: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl CellLayout {
    /// Largest square cells that fit the area, grid centered horizontally
    pub fn fit(dimensions: Dimensions, area_width: f32, area_height: f32) -> Self {
        let usable_w = (area_width - 2.0 * MARGIN).max(0.0);
        let usable_h = (area_height - 2.0 * MARGIN - STATUS_HEIGHT).max(0.0);
        let cell_size = (usable_w / dimensions.cols() as f32)
            .min(usable_h / dimensions.rows() as f32)
            .max(1.0);

        let grid_width = cell_size * dimensions.cols() as f32;
        Self {
            cell_size,
            origin_x: ((area_width - grid_width) / 2.0).max(0.0),
            origin_y: MARGIN,
        }
    }

    /// Top-left corner of a cell on screen
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }

    /// Y coordinate just below the last row
    pub fn bottom(&self, dimensions: Dimensions) -> f32 {
        self.origin_y + self.cell_size * dimensions.rows() as f32
    }
}

/// Color every cell by state, each with a thin black outline
pub fn draw_grid(grid: &Grid, layout: &CellLayout) {
    let size = layout.cell_size;
    let draw_outline = size >= 4.0;

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);
        let color = if cell.is_alive() { alive_color() } else { dead_color() };
        draw_rectangle(x, y, size, size, color);

        if draw_outline {
            draw_rectangle_lines(x, y, size, size, 1.0, BLACK);
        }
    }
}

/// Generation counter and run state under the grid
pub fn draw_status(
    grid: &Grid,
    layout: &CellLayout,
    generation: u64,
    boundary: BoundaryMode,
    is_finished: bool,
) {
    let state = if is_finished { "finished" } else { "running" };
    let text = format!(
        "Generation: {}   Population: {}   Boundary: {}   {}",
        generation,
        grid.population(),
        boundary.name(),
        state,
    );
    let y = layout.bottom(grid.dimensions()) + STATUS_HEIGHT * 0.7;
    draw_text(&text, layout.origin_x, y, 18.0, DARKGRAY);
}
