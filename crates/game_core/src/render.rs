//! Render callback contract and board geometry.
//!
//! The core never draws anything itself. A front end implements
//! [`TileRenderer`]; the core only tells it which value goes where.

use crate::grid::Grid;
use crate::types::EMPTY;

/// Callbacks a front end supplies to draw tiles.
pub trait TileRenderer {
    /// Pixel (or character) position of the centre of a cell.
    fn cell_center(&self, col: usize, row: usize) -> (f32, f32);

    /// Draw a tile of `value` centred at `center`, scaled by `scale`
    /// (1.0 = full cell size).
    fn draw_tile(&mut self, value: u32, center: (f32, f32), scale: f32);
}

/// Square board layout: outer padding, gap between cells, derived cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub board_px: f32,
    pub padding: f32,
    pub cell_gap: f32,
    pub grid_size: usize,
}

impl BoardGeometry {
    pub fn new(grid_size: usize) -> Self {
        Self {
            board_px: 600.0,
            padding: 50.0,
            cell_gap: 5.0,
            grid_size,
        }
    }

    pub fn cell_size(&self) -> f32 {
        let n = self.grid_size.max(1) as f32;
        ((self.board_px - 2.0 * self.padding - (n - 1.0) * self.cell_gap) / n).floor()
    }

    pub fn cell_center(&self, col: usize, row: usize) -> (f32, f32) {
        let cell = self.cell_size();
        let offset = |i: usize| self.padding + i as f32 * (cell + self.cell_gap) + (cell / 2.0).floor();
        (offset(col), offset(row))
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_SIZE)
    }
}

/// Draws every non-empty cell at full scale.
pub fn draw_grid<R: TileRenderer + ?Sized>(renderer: &mut R, grid: &Grid) {
    let n = grid.size();
    for row in 0..n {
        for col in 0..n {
            let value = grid.get(row, col);
            if value != EMPTY {
                let center = renderer.cell_center(col, row);
                renderer.draw_tile(value, center, 1.0);
            }
        }
    }
}
