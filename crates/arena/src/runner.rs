//! Headless game runner for any [`Solver`]

use game_core::{Direction, GameState, MoveOutcome, Solver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Configuration for a run of games
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Move attempts per game before giving up, no-ops included
    pub max_moves: u32,
    pub grid_size: usize,
    /// Game `i` is seeded with `seed + i`; entropy when unset
    pub seed: Option<u64>,
    /// Log a line per finished game
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_games: 1,
            max_moves: 10_000,
            grid_size: game_core::DEFAULT_SIZE,
            seed: None,
            verbose: true,
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    GameOver,
    MoveCap,
    /// The solver had no move to offer
    NoMove,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub final_score: u64,
    pub max_tile: u32,
    /// Move attempts, no-ops included
    pub moves: u32,
    pub no_op_moves: u32,
    pub outcome: GameOutcome,
}

impl GameRecord {
    pub fn from_game(game: &GameState, moves: u32, no_op_moves: u32, outcome: GameOutcome) -> Self {
        Self {
            final_score: game.score(),
            max_tile: game.grid().max_tile(),
            moves,
            no_op_moves,
            outcome,
        }
    }
}

/// Plays games for one solver
pub struct GameRunner {
    config: RunConfig,
}

impl GameRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Play every configured game
    pub fn run(&self, solver: &mut dyn Solver) -> Vec<GameRecord> {
        self.run_with(solver, |_, _, _| {})
    }

    /// Play every configured game, calling `on_move` after each applied move
    pub fn run_with<F>(&self, solver: &mut dyn Solver, mut on_move: F) -> Vec<GameRecord>
    where
        F: FnMut(&GameState, Direction, &MoveOutcome),
    {
        let mut records = Vec::with_capacity(self.config.num_games as usize);
        for game_num in 0..self.config.num_games {
            let mut rng = match self.config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(u64::from(game_num))),
                None => StdRng::from_entropy(),
            };
            solver.new_game();
            let record = self.play_game(solver, &mut rng, &mut on_move);

            if self.config.verbose {
                info!(
                    solver = solver.name(),
                    game = game_num + 1,
                    of = self.config.num_games,
                    score = record.final_score,
                    max_tile = record.max_tile,
                    moves = record.moves,
                    outcome = ?record.outcome,
                    "game finished"
                );
            }
            records.push(record);
        }
        records
    }

    /// Play a single game from a fresh start
    pub fn play_game<R, F>(&self, solver: &mut dyn Solver, rng: &mut R, on_move: &mut F) -> GameRecord
    where
        R: Rng + ?Sized,
        F: FnMut(&GameState, Direction, &MoveOutcome),
    {
        let mut game = GameState::new(self.config.grid_size, rng);
        let mut moves = 0;
        let mut no_op_moves = 0;

        let outcome = loop {
            if game.is_terminal() {
                break GameOutcome::GameOver;
            }
            if moves >= self.config.max_moves {
                break GameOutcome::MoveCap;
            }
            let Some(dir) = solver.get_move(game.grid()) else {
                warn!(solver = solver.name(), "solver returned no move");
                break GameOutcome::NoMove;
            };

            // A no-op spawns nothing but still counts toward the cap.
            let result = game.apply_move(dir, rng);
            moves += 1;
            if !result.moved {
                no_op_moves += 1;
            }
            on_move(&game, dir, &result);
        };

        GameRecord::from_game(&game, moves, no_op_moves, outcome)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
