//! Tree node statistics.

use game_core::{Direction, Grid};

/// Index into the owning [`Tree`](crate::tree::Tree).
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct Node {
    /// Snapshot reached by `mv` from the parent (after the simulated spawn).
    pub grid: Grid,
    /// Back-reference used only for backpropagation.
    pub parent: Option<NodeId>,
    /// Move that led here from the parent; `None` at the root.
    pub mv: Option<Direction>,
    pub children: Vec<NodeId>,
    pub visits: u32,
    pub total_reward: f64,
    pub untried: Vec<Direction>,
}

impl Node {
    pub fn new(grid: Grid, parent: Option<NodeId>, mv: Option<Direction>) -> Self {
        Self {
            grid,
            parent,
            mv,
            children: Vec::new(),
            visits: 0,
            total_reward: 0.0,
            untried: Direction::ALL.to_vec(),
        }
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    pub fn is_terminal(&self) -> bool {
        self.grid.is_terminal()
    }

    /// Mean reward; 0 for an unvisited node.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }

    /// UCB1 score of this node as a child of a parent with `parent_visits`.
    pub fn ucb1(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let explore = ((parent_visits as f64).ln() / self.visits as f64).sqrt();
        self.win_rate() + exploration * explore
    }
}
