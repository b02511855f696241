//! Evolution output storage and reporting

use std::path::Path;

use game_core::HeuristicWeights;
use serde::{Deserialize, Serialize};

use crate::config::TunerConfig;
use crate::error::TunerError;

/// Summary of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// 1-based
    pub generation: usize,
    pub best_fitness: f64,
    pub avg_fitness: f64,
    pub best_weights: HeuristicWeights,
}

/// Complete result of a tuning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Best vector seen in any generation
    pub best_weights: HeuristicWeights,
    pub best_fitness: f64,
    pub history: Vec<GenerationStats>,
    /// Configuration used
    pub params: TunerConfig,
}

impl EvolutionResult {
    /// Save results to a pretty JSON file
    pub fn save(&self, path: &Path) -> Result<(), TunerError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TunerError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self, TunerError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TunerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Evolution Results ===\n\n");
        out.push_str(&format!(
            "Population: {}, Generations: {}, Games/individual: {}\n\n",
            self.params.population_size, self.params.generations, self.params.games_per_individual
        ));
        out.push_str(&format!("{:>4}  {:>10}  {:>10}  Weights\n", "Gen", "Best", "Avg"));
        for g in &self.history {
            out.push_str(&format!(
                "{:>4}  {:>10.1}  {:>10.1}  {}\n",
                g.generation, g.best_fitness, g.avg_fitness, g.best_weights
            ));
        }
        out.push_str(&format!(
            "\nBest fitness: {:.1}\nBest weights: {}\n",
            self.best_fitness, self.best_weights
        ));
        out
    }
}
