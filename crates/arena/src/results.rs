//! Session results storage and reporting

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::runner::{GameOutcome, GameRecord, RunConfig};

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// All games one solver played in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResults {
    pub solver: String,
    pub games: Vec<GameRecord>,
    /// Configuration used
    pub config: RunConfig,
}

impl SessionResults {
    pub fn new(solver: &str, config: RunConfig) -> Self {
        Self {
            solver: solver.to_string(),
            games: Vec::new(),
            config,
        }
    }

    pub fn add_game(&mut self, record: GameRecord) {
        self.games.push(record);
    }

    pub fn average_score(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.games.iter().map(|g| g.final_score as f64).sum::<f64>() / self.games.len() as f64
    }

    pub fn best_score(&self) -> u64 {
        self.games.iter().map(|g| g.final_score).max().unwrap_or(0)
    }

    pub fn best_tile(&self) -> u32 {
        self.games.iter().map(|g| g.max_tile).max().unwrap_or(0)
    }

    /// Number of games reaching each max tile, ascending by tile
    pub fn tile_histogram(&self) -> BTreeMap<u32, u32> {
        let mut histogram = BTreeMap::new();
        for g in &self.games {
            *histogram.entry(g.max_tile).or_insert(0) += 1;
        }
        histogram
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ResultsError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ResultsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Session: {} ===\n\n", self.solver));
        report.push_str(&format!(
            "Config: {} games, {}x{} grid, move cap {}\n\n",
            self.config.num_games, self.config.grid_size, self.config.grid_size, self.config.max_moves
        ));

        report.push_str(&format!(
            "{:>5} {:>10} {:>8} {:>7} {:>7}  {}\n",
            "Game", "Score", "MaxTile", "Moves", "No-ops", "Outcome"
        ));
        report.push_str(&"-".repeat(56));
        report.push('\n');
        for (i, g) in self.games.iter().enumerate() {
            let outcome = match g.outcome {
                GameOutcome::GameOver => "game over",
                GameOutcome::MoveCap => "move cap",
                GameOutcome::NoMove => "no move",
            };
            report.push_str(&format!(
                "{:>5} {:>10} {:>8} {:>7} {:>7}  {}\n",
                i + 1,
                g.final_score,
                g.max_tile,
                g.moves,
                g.no_op_moves,
                outcome
            ));
        }

        report.push_str(&format!(
            "\nAverage score: {:.1}\nBest score: {}\nBest tile: {}\n",
            self.average_score(),
            self.best_score(),
            self.best_tile()
        ));
        report.push_str("\nMax tile reached:\n");
        for (tile, count) in self.tile_histogram() {
            report.push_str(&format!("{:>8}: {}\n", tile, count));
        }

        report
    }
}
