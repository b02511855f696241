pub mod animation;
pub mod config;
pub mod eval;
pub mod game;
pub mod grid;
pub mod render;
pub mod types;

// Re-export core game logic (not solver-specific)
pub use animation::*;
pub use config::*;
pub use eval::{evaluate, evaluate_weighted, HeuristicWeights};
pub use game::*;
pub use grid::*;
pub use render::*;
pub use types::*;

// =============================================================================
// Solver trait — implemented by every automated (or human) player
// =============================================================================

/// Result of a move decision.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None if the solver has nothing to offer)
    pub best_move: Option<Direction>,
    /// Value the solver assigned to the chosen move, in its own units
    pub score: f64,
    /// Search depth (plies) or iteration count used
    pub depth: u32,
    /// Number of nodes evaluated (for stats)
    pub nodes: u64,
}

impl SearchResult {
    pub fn none() -> Self {
        Self {
            best_move: None,
            score: 0.0,
            depth: 0,
            nodes: 0,
        }
    }
}

/// Trait that all players implement.
///
/// A solver receives a read-only grid snapshot. Any exploration happens on
/// copies; the snapshot is never modified.
pub trait Solver: Send {
    /// Decide a move for `grid`, returning statistics alongside it.
    fn search(&mut self, grid: &Grid) -> SearchResult;

    /// The chosen move only.
    fn get_move(&mut self, grid: &Grid) -> Option<Direction> {
        self.search(grid).best_move
    }

    /// Registry name, lowercase.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
