//! Square 2048 grid and the move-resolution engine.
//!
//! Every direction is resolved with the same primitive, [`process_line_left`],
//! applied to lines read in the order given by [`Direction`]'s coordinate
//! mapping. Slide and merge bookkeeping is translated back to grid
//! coordinates through the same mapping, so the four directions are
//! symmetric by construction.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must be non-empty")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) holds {value}, which is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Cell },
}

/// Result of reducing one line towards index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: Vec<Cell>,
    /// Original index -> output index, for tiles that moved or merged.
    pub slides: BTreeMap<usize, usize>,
    /// Output index -> merged value.
    pub merges: BTreeMap<usize, Cell>,
    pub score_delta: u64,
}

/// Slides and merges a single line to the left.
///
/// Equal neighbours (after compaction) merge pairwise, greedily from the left:
/// `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. A tile produced by a merge never
/// merges again in the same move.
pub fn process_line_left(line: &[Cell]) -> LineOutcome {
    let tiles: Vec<(Cell, usize)> = line
        .iter()
        .enumerate()
        .filter(|(_, &v)| v != EMPTY)
        .map(|(i, &v)| (v, i))
        .collect();

    let mut out = LineOutcome {
        line: Vec::with_capacity(line.len()),
        ..Default::default()
    };

    let mut i = 0;
    while i < tiles.len() {
        let (value, origin) = tiles[i];
        let slot = out.line.len();

        match tiles.get(i + 1) {
            Some(&(next, next_origin)) if next == value => {
                let merged = value * 2;
                out.line.push(merged);
                out.slides.insert(origin, slot);
                out.slides.insert(next_origin, slot);
                out.merges.insert(slot, merged);
                out.score_delta += merged as u64;
                i += 2;
            }
            _ => {
                out.line.push(value);
                if origin != slot {
                    out.slides.insert(origin, slot);
                }
                i += 1;
            }
        }
    }

    out.line.resize(line.len(), EMPTY);
    out
}

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty `size` x `size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    /// Builds a grid from rows, checking shape and tile values.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: r.len(),
                    size,
                });
            }
            for (col, &value) in r.iter().enumerate() {
                if value != EMPTY && (value < 2 || !value.is_power_of_two()) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
            cells.extend_from_slice(r);
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        self.cells[row * self.size + col] = value;
    }

    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(|r| r.to_vec()).collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty cells in scan (row-major) order.
    pub fn empty_cells(&self) -> Vec<Coords> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.contains(&EMPTY)
    }

    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// True iff the board is full and no two orthogonal neighbours are equal.
    pub fn is_terminal(&self) -> bool {
        if self.has_empty() {
            return false;
        }
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let v = self.get(r, c);
                if c + 1 < n && self.get(r, c + 1) == v {
                    return false;
                }
                if r + 1 < n && self.get(r + 1, c) == v {
                    return false;
                }
            }
        }
        true
    }

    /// Applies one move in place and reports what happened.
    pub fn shift(&mut self, direction: Direction) -> MoveOutcome {
        let n = self.size;
        let mut outcome = MoveOutcome::no_op();
        let mut line = vec![EMPTY; n];

        for l in 0..n {
            for (k, slot) in line.iter_mut().enumerate() {
                let (r, c) = direction.coords(n, l, k);
                *slot = self.get(r, c);
            }

            let reduced = process_line_left(&line);
            if reduced.line != line {
                outcome.moved = true;
            }

            for (k, &value) in reduced.line.iter().enumerate() {
                let (r, c) = direction.coords(n, l, k);
                self.set(r, c, value);
            }
            for (&from, &to) in &reduced.slides {
                outcome
                    .slides
                    .insert(direction.coords(n, l, from), direction.coords(n, l, to));
            }
            for (&at, &value) in &reduced.merges {
                outcome.merges.insert(direction.coords(n, l, at), value);
            }
            outcome.score_delta += reduced.score_delta;
        }

        outcome
    }

    /// Non-mutating form of [`Grid::shift`].
    pub fn shifted(&self, direction: Direction) -> (Grid, MoveOutcome) {
        let mut next = self.clone();
        let outcome = next.shift(direction);
        (next, outcome)
    }

    /// Directions that change the grid, in [`Direction::ALL`] order.
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.shifted(d).1.moved)
            .collect()
    }

    /// Left-right mirror image.
    pub fn mirrored(&self) -> Grid {
        let n = self.size;
        let mut out = Grid::new(n);
        for r in 0..n {
            for c in 0..n {
                out.set(r, n - 1 - c, self.get(r, c));
            }
        }
        out
    }

    pub fn transposed(&self) -> Grid {
        let n = self.size;
        let mut out = Grid::new(n);
        for r in 0..n {
            for c in 0..n {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "{}", line.join("\t"))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.chunks(self.size)).finish()
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod grid_tests;
