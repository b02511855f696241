//! Arena-backed search tree.
//!
//! The arena owns every node; a parent lists its children by id and a child
//! refers back to its parent by id, so ownership stays strictly tree-shaped.
//! The whole tree is dropped after each move decision.

use game_core::{spawn_random_tile, Direction, GameState, Grid};
use rand::Rng;

use crate::node::{Node, NodeId};

pub const ROOT: NodeId = 0;

/// Scores are divided by this to keep rewards in a small range.
pub const REWARD_SCALE: f64 = 100_000.0;

pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(root: Grid) -> Self {
        Self {
            nodes: vec![Node::new(root, None, None)],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    fn push_child(&mut self, parent: NodeId, grid: Grid, mv: Direction) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(grid, Some(parent), Some(mv)));
        self.nodes[parent].children.push(id);
        id
    }

    /// Child with the highest UCB1 score. An unvisited child wins outright.
    pub fn select_child(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        let parent = &self.nodes[id];
        let mut best: Option<(NodeId, f64)> = None;
        for &child in &parent.children {
            let node = &self.nodes[child];
            if node.visits == 0 {
                return Some(child);
            }
            let score = node.ucb1(parent.visits, exploration);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((child, score));
            }
        }
        best.map(|(child, _)| child)
    }

    /// Pops random untried directions until one moves the grid, then adds a
    /// child for it with one simulated tile spawn. Returns `None` once every
    /// untried direction turned out to be a no-op.
    pub fn expand<R: Rng + ?Sized>(&mut self, id: NodeId, rng: &mut R) -> Option<NodeId> {
        while !self.nodes[id].untried.is_empty() {
            let untried = &mut self.nodes[id].untried;
            let mv = untried.swap_remove(rng.gen_range(0..untried.len()));

            let (mut next, outcome) = self.nodes[id].grid.shifted(mv);
            if !outcome.moved {
                continue;
            }
            spawn_random_tile(&mut next, rng);
            return Some(self.push_child(id, next, mv));
        }
        None
    }

    /// Adds `reward` and one visit to `id` and every ancestor.
    pub fn backpropagate(&mut self, id: NodeId, reward: f64) {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &mut self.nodes[current];
            node.visits += 1;
            node.total_reward += reward;
            cursor = node.parent;
        }
    }

    /// Root child with the most visits.
    pub fn most_visited_child(&self) -> Option<NodeId> {
        self.nodes[ROOT]
            .children
            .iter()
            .copied()
            .max_by_key(|&child| self.nodes[child].visits)
    }
}

/// Plays uniformly random legal moves from `grid` until the game ends or
/// `max_moves` is reached, returning the accumulated score / [`REWARD_SCALE`].
pub fn simulate<R: Rng + ?Sized>(grid: &Grid, max_moves: u32, rng: &mut R) -> f64 {
    let mut game = GameState::from_grid(grid.clone());
    let mut moves = 0;

    while moves < max_moves && !game.is_terminal() {
        let legal = game.legal_moves();
        if legal.is_empty() {
            break;
        }
        let mv = legal[rng.gen_range(0..legal.len())];
        game.apply_move(mv, rng);
        moves += 1;
    }

    game.score() as f64 / REWARD_SCALE
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
