//! MinMax Solver
//!
//! Treats tile spawns as an adversary: the player ply maximises, the
//! environment ply places the worst possible 2 or 4. Alpha-beta pruning keeps
//! the tree small enough for depth 3 to run interactively.

mod search;

use game_core::{Grid, SearchResult, Solver, SolverConfig};

/// Adversarial search solver.
///
/// This solver uses:
/// - Minimax over alternating player / environment plies
/// - Alpha-beta pruning
/// - The fixed empty/monotonicity/smoothness evaluation
#[derive(Debug, Clone)]
pub struct MinMaxSolver {
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl MinMaxSolver {
    pub const DEFAULT_DEPTH: u8 = 3;

    pub fn new() -> Self {
        Self::with_depth(Self::DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Self { depth, nodes: 0 }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::with_depth(config.minmax_depth)
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinMaxSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MinMaxSolver {
    fn search(&mut self, grid: &Grid) -> SearchResult {
        self.nodes = 0;
        let result = search::pick_best_move(grid, self.depth, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s as f64).unwrap_or(0.0),
            depth: self.depth as u32,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "minmax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::{minimax, pick_best_move};
