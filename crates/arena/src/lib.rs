//! Arena for 2048 solvers
//!
//! This crate provides:
//! - A registry mapping solver names to constructors
//! - A headless runner that plays full games with any solver
//! - Session results with JSON storage and text reports
//! - A terminal renderer for watching games
//!
//! # Usage
//!
//! ```bash
//! # Ten seeded expectimax games, saved as JSON
//! cargo run -p arena -- --player expectimax --games 10 --seed 1 --output results.json
//!
//! # Watch a single MCTS game
//! cargo run -p arena -- --player mcts --show
//! ```

mod human;
mod registry;
mod render;
mod results;
mod runner;

pub use human::*;
pub use registry::*;
pub use render::*;
pub use results::*;
pub use runner::*;
