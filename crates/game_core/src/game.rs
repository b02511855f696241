//! Live game state: grid, score and the game-over flag.
//!
//! Randomness is always supplied by the caller so that games and playouts are
//! reproducible from a seed.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::types::*;

/// Probability that a spawned tile is a 2 (otherwise 4).
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Draws the value of a freshly spawned tile.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Cell {
    if rng.gen_bool(SPAWN_TWO_PROBABILITY) {
        2
    } else {
        4
    }
}

/// Places one random tile on `grid`. Returns false if the grid is full.
pub fn spawn_random_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    let empty = grid.empty_cells();
    let Some(&(r, c)) = empty.choose(rng) else {
        return false;
    };
    grid.set(r, c, random_tile_value(rng));
    true
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    score: u64,
    game_over: bool,
}

impl GameState {
    /// A fresh `size` x `size` game with two random tiles.
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut state = Self::from_grid(Grid::new(size));
        state.spawn_tile(rng);
        state.spawn_tile(rng);
        state
    }

    /// Wraps an existing grid with a zero score.
    pub fn from_grid(grid: Grid) -> Self {
        let game_over = grid.is_terminal();
        Self {
            grid,
            score: 0,
            game_over,
        }
    }

    pub fn with_score(mut self, score: u64) -> Self {
        self.score = score;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Places a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// Returns false when the board is full; that is not an error, the caller
    /// checks terminality separately.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        spawn_random_tile(&mut self.grid, rng)
    }

    /// Applies a move. On a real move exactly one tile is spawned and the
    /// merge score is added; a no-op leaves the state untouched.
    pub fn apply_move<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> MoveOutcome {
        let (next, outcome) = self.grid.shifted(direction);
        if !outcome.moved {
            return outcome;
        }
        self.grid = next;
        self.spawn_tile(rng);
        self.score += outcome.score_delta;
        self.game_over = self.grid.is_terminal();
        outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.grid.is_terminal()
    }

    pub fn legal_moves(&self) -> Vec<Direction> {
        self.grid.legal_moves()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
