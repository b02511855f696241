//! Expectimax Solver
//!
//! Same tree shape as MinMax, but the environment ply averages over tile
//! spawns weighted by their probability instead of assuming the worst one.

mod search;

use game_core::{Grid, SearchResult, Solver, SolverConfig};

/// Expectation-maximising search solver.
#[derive(Debug, Clone)]
pub struct ExpectimaxSolver {
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl ExpectimaxSolver {
    pub const DEFAULT_DEPTH: u8 = 4;

    pub fn new() -> Self {
        Self::with_depth(Self::DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Self { depth, nodes: 0 }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::with_depth(config.expectimax_depth)
    }
}

impl Default for ExpectimaxSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for ExpectimaxSolver {
    fn search(&mut self, grid: &Grid) -> SearchResult {
        self.nodes = 0;
        let result = search::pick_best_move(grid, self.depth, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0.0),
            depth: self.depth as u32,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "expectimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use search::{expectimax, pick_best_move, MAX_CHANCE_CELLS};
