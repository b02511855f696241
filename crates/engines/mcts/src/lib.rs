//! Monte Carlo Tree Search Solver
//!
//! Each decision grows a fresh tree from the current grid:
//! selection by UCB1, expansion of one untried direction, a uniformly random
//! playout, and backpropagation of the normalised playout score. The move
//! played is the root child visited most often.

mod node;
mod tree;

use game_core::{Direction, Grid, SearchResult, Solver, SolverConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

pub use node::{Node, NodeId};
pub use tree::{simulate, Tree, REWARD_SCALE, ROOT};

#[derive(Debug, Clone)]
pub struct MctsSolver {
    simulations: u32,
    exploration: f64,
    max_playout_moves: u32,
    rng: StdRng,
}

impl MctsSolver {
    pub const DEFAULT_SIMULATIONS: u32 = 300;
    pub const DEFAULT_EXPLORATION: f64 = 1.414;
    pub const DEFAULT_MAX_PLAYOUT_MOVES: u32 = 1000;

    pub fn new() -> Self {
        Self::from_config(&SolverConfig::default())
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            simulations: config.mcts_simulations,
            exploration: config.mcts_exploration,
            max_playout_moves: config.mcts_max_playout_moves,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.simulations = simulations;
        self
    }

    /// Runs one selection / expansion / simulation / backpropagation pass.
    fn iterate(&mut self, tree: &mut Tree) {
        let mut node = ROOT;
        while !tree.get(node).is_terminal() && tree.get(node).is_fully_expanded() {
            match tree.select_child(node, self.exploration) {
                Some(child) => node = child,
                None => break,
            }
        }

        if !tree.get(node).is_terminal() && !tree.get(node).is_fully_expanded() {
            if let Some(child) = tree.expand(node, &mut self.rng) {
                node = child;
            }
        }

        // A terminal node plays zero moves and so scores zero.
        let reward = simulate(&tree.get(node).grid, self.max_playout_moves, &mut self.rng);
        tree.backpropagate(node, reward);
    }

    fn fallback_move(&mut self, grid: &Grid) -> Option<Direction> {
        let legal = grid.legal_moves();
        let pool: &[Direction] = if legal.is_empty() {
            &Direction::ALL
        } else {
            &legal
        };
        pool.choose(&mut self.rng).copied()
    }
}

impl Default for MctsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MctsSolver {
    fn search(&mut self, grid: &Grid) -> SearchResult {
        let mut tree = Tree::new(grid.clone());
        for _ in 0..self.simulations {
            self.iterate(&mut tree);
        }

        let (best_move, score) = match tree.most_visited_child() {
            Some(child) => {
                let node = tree.get(child);
                debug!(
                    mv = ?node.mv,
                    visits = node.visits,
                    win_rate = node.win_rate(),
                    tree_size = tree.len(),
                    "mcts decision"
                );
                (node.mv, node.win_rate())
            }
            None => {
                warn!("mcts root never expanded, falling back to a random direction");
                (self.fallback_move(grid), 0.0)
            }
        };

        SearchResult {
            best_move,
            score,
            depth: self.simulations,
            nodes: tree.len() as u64,
        }
    }

    fn name(&self) -> &str {
        "mcts"
    }
}
