//! Expectimax search over player and chance plies

use game_core::{evaluate, Direction, Grid, SPAWN_TWO_PROBABILITY};
use tracing::debug;

/// Chance nodes only branch on the first this-many empty cells, in scan order.
pub const MAX_CHANCE_CELLS: usize = 6;

/// Searches the grid and returns the best move with its expected value.
///
/// # Returns
/// `None` if no direction moves anything.
pub fn pick_best_move(grid: &Grid, depth: u8, nodes: &mut u64) -> Option<(Direction, f64)> {
    let mut best: Option<(Direction, f64)> = None;

    for dir in Direction::ALL {
        let (next, outcome) = grid.shifted(dir);
        if !outcome.moved {
            continue;
        }
        *nodes += 1;

        let score = expectimax(&next, depth.saturating_sub(1), false, nodes);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((dir, score));
        }
    }

    debug!(?best, depth, nodes = *nodes, "expectimax decision");
    best
}

/// Recursive expectimax. `maximizing` is the player ply; otherwise a chance
/// ply that averages over spawning a 2 (p = 0.9) or a 4 (p = 0.1) in each
/// considered empty cell, cells weighted uniformly.
pub fn expectimax(grid: &Grid, depth: u8, maximizing: bool, nodes: &mut u64) -> f64 {
    if depth == 0 || grid.is_terminal() {
        return evaluate(grid) as f64;
    }

    if maximizing {
        let mut best: Option<f64> = None;
        for dir in Direction::ALL {
            let (next, outcome) = grid.shifted(dir);
            if !outcome.moved {
                continue;
            }
            *nodes += 1;

            let score = expectimax(&next, depth - 1, false, nodes);
            best = Some(best.map_or(score, |b| b.max(score)));
        }
        best.unwrap_or_else(|| evaluate(grid) as f64)
    } else {
        let mut empty = grid.empty_cells();
        if empty.is_empty() {
            return evaluate(grid) as f64;
        }
        empty.truncate(MAX_CHANCE_CELLS);

        let cell_probability = 1.0 / empty.len() as f64;
        let outcomes = [(2, SPAWN_TWO_PROBABILITY), (4, 1.0 - SPAWN_TWO_PROBABILITY)];

        let mut expected = 0.0;
        for (r, c) in empty {
            for (value, p) in outcomes {
                let mut next = grid.clone();
                next.set(r, c, value);
                *nodes += 1;

                expected += cell_probability * p * expectimax(&next, depth - 1, true, nodes);
            }
        }
        expected
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
