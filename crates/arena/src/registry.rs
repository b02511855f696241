//! Name to solver-constructor lookup.
//!
//! Names are case-insensitive and kept in registration order so listings
//! are stable.

use game_core::{Solver, SolverConfig};
use thiserror::Error;

use expectimax_solver::ExpectimaxSolver;
use mcts_solver::MctsSolver;
use minimax_solver::MinMaxSolver;
use random_solver::RandomSolver;

use crate::human::HumanSolver;

/// Builds a solver from the shared config and an optional RNG seed.
pub type SolverFactory = fn(&SolverConfig, Option<u64>) -> Box<dyn Solver>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("solver '{0}' is already registered")]
    AlreadyRegistered(String),
    #[error("unknown solver '{name}' (known: {})", .known.join(", "))]
    UnknownSolver { name: String, known: Vec<String> },
}

#[derive(Default)]
pub struct SolverRegistry {
    entries: Vec<(String, SolverFactory)>,
}

impl SolverRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in solver.
    pub fn with_default_solvers() -> Self {
        let mut registry = Self::new();
        let builtins: [(&str, SolverFactory); 5] = [
            ("human", |_, _| Box::new(HumanSolver::new())),
            ("random", |_, seed| match seed {
                Some(s) => Box::new(RandomSolver::with_seed(s)),
                None => Box::new(RandomSolver::new()),
            }),
            ("minmax", |cfg, _| Box::new(MinMaxSolver::from_config(cfg))),
            ("expectimax", |cfg, _| Box::new(ExpectimaxSolver::from_config(cfg))),
            ("mcts", |cfg, seed| {
                let solver = MctsSolver::from_config(cfg);
                Box::new(match seed {
                    Some(s) => solver.with_seed(s),
                    None => solver,
                })
            }),
        ];
        for (name, factory) in builtins {
            // Fresh registry, names are distinct.
            let _ = registry.register(name, factory);
        }
        registry
    }

    pub fn register(&mut self, name: &str, factory: SolverFactory) -> Result<(), RegistryError> {
        let key = name.to_lowercase();
        if self.contains(&key) {
            return Err(RegistryError::AlreadyRegistered(key));
        }
        self.entries.push((key, factory));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        self.entries.iter().any(|(n, _)| *n == key)
    }

    pub fn create(
        &self,
        name: &str,
        config: &SolverConfig,
        seed: Option<u64>,
    ) -> Result<Box<dyn Solver>, RegistryError> {
        let key = name.to_lowercase();
        self.entries
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, factory)| factory(config, seed))
            .ok_or_else(|| RegistryError::UnknownSolver {
                name: name.to_string(),
                known: self.names().into_iter().map(str::to_string).collect(),
            })
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
