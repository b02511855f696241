//! Greedy one-ply player and seeded fitness playouts.

use game_core::{evaluate_weighted, Direction, GameState, Grid, HeuristicWeights};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Picks the direction whose resulting grid scores highest under `weights`.
/// No lookahead and no tile spawn. Ties keep the earlier direction.
pub fn greedy_move(grid: &Grid, weights: &HeuristicWeights) -> Option<Direction> {
    let mut best: Option<(Direction, f64)> = None;
    for dir in Direction::ALL {
        let (next, outcome) = grid.shifted(dir);
        if !outcome.moved {
            continue;
        }
        let value = evaluate_weighted(&next, weights);
        if best.map_or(true, |(_, v)| value > v) {
            best = Some((dir, value));
        }
    }
    best.map(|(dir, _)| dir)
}

/// Plays one greedy game from a fresh seeded start. Returns the final score.
pub fn play_greedy_game(weights: &HeuristicWeights, grid_size: usize, max_moves: u32, seed: u64) -> u64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new(grid_size, &mut rng);
    for _ in 0..max_moves {
        if game.is_terminal() {
            break;
        }
        let Some(dir) = greedy_move(game.grid(), weights) else {
            break;
        };
        game.apply_move(dir, &mut rng);
    }
    game.score()
}

/// Average final score over `games` playouts seeded `base_seed + i`.
pub fn evaluate_fitness(
    weights: &HeuristicWeights,
    games: u32,
    max_moves: u32,
    grid_size: usize,
    base_seed: u64,
) -> f64 {
    if games == 0 {
        return 0.0;
    }
    let total: u64 = (0..games)
        .map(|i| play_greedy_game(weights, grid_size, max_moves, base_seed.wrapping_add(u64::from(i))))
        .sum();
    total as f64 / f64::from(games)
}

#[cfg(test)]
#[path = "playout_tests.rs"]
mod playout_tests;
