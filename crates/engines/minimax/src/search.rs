//! Minimax search with alpha-beta pruning

use game_core::{evaluate, Direction, Grid};
use tracing::debug;

/// Tile values the environment may place.
const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Searches the grid and returns the best move with its value.
///
/// Directions that do not change the grid are skipped. Each remaining
/// direction is scored by a minimising (environment) search one ply down.
///
/// # Returns
/// `None` if no direction moves anything.
pub fn pick_best_move(grid: &Grid, depth: u8, nodes: &mut u64) -> Option<(Direction, i64)> {
    let mut best: Option<(Direction, i64)> = None;

    for dir in Direction::ALL {
        let (next, outcome) = grid.shifted(dir);
        if !outcome.moved {
            continue;
        }
        *nodes += 1;

        let score = minimax(
            &next,
            depth.saturating_sub(1),
            i64::MIN,
            i64::MAX,
            false,
            nodes,
        );

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((dir, score));
        }
    }

    debug!(?best, depth, nodes = *nodes, "minmax decision");
    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// Depth 0 or a terminal grid evaluates statically.
pub fn minimax(
    grid: &Grid,
    depth: u8,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    nodes: &mut u64,
) -> i64 {
    if depth == 0 || grid.is_terminal() {
        return evaluate(grid);
    }

    if maximizing {
        let mut best = i64::MIN;
        for dir in Direction::ALL {
            let (next, outcome) = grid.shifted(dir);
            if !outcome.moved {
                continue;
            }
            *nodes += 1;

            let score = minimax(&next, depth - 1, alpha, beta, false, nodes);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        if best == i64::MIN {
            // Nothing moves, e.g. an empty grid.
            return evaluate(grid);
        }
        best
    } else {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            return evaluate(grid);
        }

        let mut worst = i64::MAX;
        'cells: for (r, c) in empty {
            for value in SPAWN_VALUES {
                let mut next = grid.clone();
                next.set(r, c, value);
                *nodes += 1;

                let score = minimax(&next, depth - 1, alpha, beta, true, nodes);
                worst = worst.min(score);
                beta = beta.min(worst);
                if beta <= alpha {
                    break 'cells; // Alpha cutoff
                }
            }
        }
        worst
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
