//! Tuner configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TunerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunerConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Per-gene mutation probability.
    pub mutation_rate: f64,
    /// Individuals copied unchanged into the next generation.
    pub elite_size: usize,
    pub tournament_size: usize,
    /// Seeded playouts averaged per fitness evaluation.
    pub games_per_individual: u32,
    /// Move cap per playout.
    pub max_moves: u32,
    /// Playout `i` is seeded with `base_seed + i`, identical for every individual.
    pub base_seed: u64,
    /// Seed for population init, selection and mutation. Entropy if unset.
    pub seed: Option<u64>,
    pub grid_size: usize,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 20,
            mutation_rate: 0.15,
            elite_size: 5,
            tournament_size: 3,
            games_per_individual: 3,
            max_moves: 1000,
            base_seed: 42,
            seed: None,
            grid_size: game_core::DEFAULT_SIZE,
        }
    }
}

impl TunerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, TunerError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, TunerError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TunerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), TunerError> {
        let invalid = |msg: String| Err(TunerError::InvalidParameter(msg));
        if self.population_size < 2 {
            return invalid(format!("population_size must be >= 2, got {}", self.population_size));
        }
        if self.elite_size > self.population_size {
            return invalid(format!(
                "elite_size ({}) exceeds population_size ({})",
                self.elite_size, self.population_size
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid(format!("mutation_rate must be in [0, 1], got {}", self.mutation_rate));
        }
        if self.tournament_size == 0 {
            return invalid("tournament_size must be >= 1".to_string());
        }
        if self.games_per_individual == 0 || self.max_moves == 0 {
            return invalid("games_per_individual and max_moves must be non-zero".to_string());
        }
        if self.generations == 0 {
            return invalid("generations must be >= 1".to_string());
        }
        if self.grid_size < 2 {
            return invalid(format!("grid_size must be >= 2, got {}", self.grid_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        TunerConfig::default().validate().unwrap();
    }

    #[test]
    fn toml_overrides_defaults() {
        let cfg = TunerConfig::from_toml_str("generations = 3\nseed = 9\n").unwrap();
        assert_eq!(cfg.generations, 3);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.population_size, 30);
    }

    #[test]
    fn rejects_oversized_elite() {
        let cfg = TunerConfig {
            population_size: 4,
            elite_size: 5,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(TunerError::InvalidParameter(_))));
    }

    #[test]
    fn rejects_bad_mutation_rate() {
        let cfg = TunerConfig {
            mutation_rate: 1.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
