//! Solver tuning knobs, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```toml
//! minmax_depth = 4
//! mcts_simulations = 500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Plies searched by MinMax (player and environment plies both count).
    pub minmax_depth: u8,
    /// Plies searched by Expectimax.
    pub expectimax_depth: u8,
    /// MCTS iterations per move decision.
    pub mcts_simulations: u32,
    /// UCB1 exploration constant.
    pub mcts_exploration: f64,
    /// Cap on random playout length.
    pub mcts_max_playout_moves: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            minmax_depth: 3,
            expectimax_depth: 4,
            mcts_simulations: 300,
            mcts_exploration: 1.414,
            mcts_max_playout_moves: 1000,
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(SolverConfig::from_toml_str("").unwrap(), SolverConfig::default());
    }

    #[test]
    fn partial_config_overrides_fields() {
        let cfg = SolverConfig::from_toml_str("minmax_depth = 5\nmcts_exploration = 0.5\n").unwrap();
        assert_eq!(cfg.minmax_depth, 5);
        assert_eq!(cfg.mcts_exploration, 0.5);
        assert_eq!(cfg.expectimax_depth, 4);
        assert_eq!(cfg.mcts_simulations, 300);
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let err = SolverConfig::from_toml_str("minmax_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SolverConfig::load(Path::new("/nonexistent/solver.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
