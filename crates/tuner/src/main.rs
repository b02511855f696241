//! Genetic weight tuner CLI
//!
//! Evolves heuristic weights and writes the result as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tuner::{GeneticTuner, TunerConfig};

#[derive(Parser, Debug)]
#[command(name = "tune", version, about = "Evolve 2048 heuristic weights with a genetic algorithm")]
struct Cli {
    /// TOML file with tuner parameters
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of generations
    #[arg(short, long)]
    generations: Option<usize>,
    /// Population size
    #[arg(short, long)]
    population: Option<usize>,
    /// Seed for the evolution RNG
    #[arg(short, long)]
    seed: Option<u64>,
    /// Where to write the evolution result
    #[arg(short, long, value_name = "FILE", default_value = "evolution.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TunerConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => TunerConfig::default(),
    };
    if let Some(g) = cli.generations {
        config.generations = g;
    }
    if let Some(p) = cli.population {
        config.population_size = p;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let mut tuner = GeneticTuner::new(config).context("invalid tuner configuration")?;
    tracing::info!(
        population = tuner.config().population_size,
        generations = tuner.config().generations,
        "starting evolution"
    );
    let result = tuner.run();

    println!("{}", result.report());
    result
        .save(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    println!("Results saved to {}", cli.output.display());
    Ok(())
}
