//! Offline genetic tuning of the weighted 2048 heuristic.
//!
//! Individuals are [`HeuristicWeights`](game_core::HeuristicWeights) vectors
//! scored by a greedy one-ply player over seeded playouts.

pub mod config;
pub mod error;
pub mod genetic;
pub mod playout;
pub mod results;

pub use config::TunerConfig;
pub use error::TunerError;
pub use genetic::{evolve_weights, GeneticTuner, Individual};
pub use playout::{evaluate_fitness, greedy_move, play_greedy_game};
pub use results::{EvolutionResult, GenerationStats};
