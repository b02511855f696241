//! Character-grid renderer for terminal output.

use game_core::{draw_grid, Grid, TileRenderer};

/// Columns per cell, wide enough for five-digit tiles plus spacing.
pub const CELL_WIDTH: usize = 7;

pub struct AsciiRenderer {
    size: usize,
    canvas: Vec<Vec<char>>,
}

impl AsciiRenderer {
    pub fn new(size: usize) -> Self {
        let mut renderer = Self {
            size,
            canvas: Vec::new(),
        };
        renderer.clear();
        renderer
    }

    /// Resets the canvas to a dot in every cell.
    pub fn clear(&mut self) {
        self.canvas = vec![vec![' '; self.size * CELL_WIDTH]; self.size];
        for row in 0..self.size {
            for col in 0..self.size {
                let center = self.cell_center(col, row);
                self.put_centered(".", center);
            }
        }
    }

    /// Draws `grid` onto a fresh canvas and returns it as text.
    pub fn render(&mut self, grid: &Grid) -> String {
        if grid.size() != self.size {
            self.size = grid.size();
        }
        self.clear();
        draw_grid(self, grid);
        self.contents()
    }

    pub fn contents(&self) -> String {
        self.canvas
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn put_centered(&mut self, text: &str, center: (f32, f32)) {
        let row = center.1.max(0.0) as usize;
        let Some(line) = self.canvas.get_mut(row) else {
            return;
        };
        let start = (center.0.max(0.0) as usize).saturating_sub(text.len() / 2);
        for (i, ch) in text.chars().enumerate() {
            if let Some(slot) = line.get_mut(start + i) {
                *slot = ch;
            }
        }
    }
}

impl TileRenderer for AsciiRenderer {
    fn cell_center(&self, col: usize, row: usize) -> (f32, f32) {
        ((col * CELL_WIDTH + CELL_WIDTH / 2) as f32, row as f32)
    }

    fn draw_tile(&mut self, value: u32, center: (f32, f32), _scale: f32) {
        // Wipe the cell's dot placeholder first.
        self.put_centered("   ", center);
        self.put_centered(&value.to_string(), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tiles_and_placeholders() {
        let grid = Grid::from_rows(&[[2, 0], [0, 2048]]).unwrap();
        let text = AsciiRenderer::new(2).render(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["2", "."]);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), vec![".", "2048"]);
    }

    #[test]
    fn adapts_to_grid_size() {
        let mut r = AsciiRenderer::new(4);
        let text = r.render(&Grid::new(3));
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.matches('.').count(), 9);
    }
}
