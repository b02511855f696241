//! Random Move Solver
//!
//! Picks one of the four directions uniformly at random, legal or not.
//! Useful for:
//! - Testing the game runner before trusting a real solver
//! - Baseline comparisons (any search solver should easily beat this)
//! - Exercising the no-op move path, since the caller has to detect it

use game_core::{Direction, Grid, SearchResult, Solver};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A solver that plays random directions.
///
/// This solver provides no evaluation and does not even check whether the
/// chosen direction changes the board. It is the simplest possible solver.
#[derive(Debug, Clone)]
pub struct RandomSolver {
    rng: StdRng,
}

impl RandomSolver {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for RandomSolver {
    fn search(&mut self, _grid: &Grid) -> SearchResult {
        let best_move = Direction::ALL.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
