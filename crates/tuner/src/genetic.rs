//! Genetic search over [`HeuristicWeights`].
//!
//! Each generation scores every individual with seeded greedy playouts,
//! copies the elite unchanged, and fills the rest through tournament
//! selection, single-point crossover and gaussian mutation.

use game_core::HeuristicWeights;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};

use crate::config::TunerConfig;
use crate::error::TunerError;
use crate::playout::evaluate_fitness;
use crate::results::{EvolutionResult, GenerationStats};

/// Initial sampling range per gene, in `HeuristicWeights::LABELS` order.
pub const GENE_BOUNDS: [(f64, f64); HeuristicWeights::LEN] =
    [(5.0, 30.0), (10.0, 50.0), (1.0, 15.0), (20.0, 80.0), (1.0, 10.0)];

/// Genes never drop below this after mutation.
pub const MIN_GENE: f64 = 0.1;

/// Mutation standard deviation as a fraction of the gene's magnitude.
pub const MUTATION_SCALE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Individual {
    pub weights: HeuristicWeights,
    pub fitness: f64,
}

pub fn random_weights<R: Rng + ?Sized>(rng: &mut R) -> HeuristicWeights {
    let mut genes = [0.0; HeuristicWeights::LEN];
    for (gene, &(lo, hi)) in genes.iter_mut().zip(GENE_BOUNDS.iter()) {
        *gene = rng.gen_range(lo..=hi);
    }
    HeuristicWeights::from_array(genes)
}

pub fn initialize_population<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<HeuristicWeights> {
    (0..size).map(|_| random_weights(rng)).collect()
}

/// Samples `k` distinct individuals and returns the fittest.
pub fn tournament_select<'a, R: Rng + ?Sized>(
    scored: &'a [Individual],
    k: usize,
    rng: &mut R,
) -> Option<&'a Individual> {
    scored
        .choose_multiple(rng, k.max(1))
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
}

/// Single-point crossover: genes before the cut come from `a`, the rest from `b`.
pub fn crossover<R: Rng + ?Sized>(a: &HeuristicWeights, b: &HeuristicWeights, rng: &mut R) -> HeuristicWeights {
    let cut = rng.gen_range(1..HeuristicWeights::LEN);
    let (ga, gb) = (a.to_array(), b.to_array());
    let mut child = ga;
    child[cut..].copy_from_slice(&gb[cut..]);
    HeuristicWeights::from_array(child)
}

/// Perturbs each gene with probability `rate`, then clamps every gene to [`MIN_GENE`].
pub fn mutate<R: Rng + ?Sized>(weights: &HeuristicWeights, rate: f64, rng: &mut R) -> HeuristicWeights {
    let mut genes = weights.to_array();
    for gene in genes.iter_mut() {
        if rng.gen::<f64>() < rate {
            if let Ok(noise) = Normal::new(0.0, MUTATION_SCALE * gene.abs()) {
                *gene += noise.sample(rng);
            }
        }
        *gene = gene.max(MIN_GENE);
    }
    HeuristicWeights::from_array(genes)
}

/// Ranks `scored` best-first and breeds the next generation from it.
pub fn next_generation<R: Rng + ?Sized>(
    scored: &mut [Individual],
    config: &TunerConfig,
    rng: &mut R,
) -> Vec<HeuristicWeights> {
    scored.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

    let mut next: Vec<HeuristicWeights> = scored
        .iter()
        .take(config.elite_size)
        .map(|ind| ind.weights)
        .collect();

    while next.len() < config.population_size {
        let (Some(p1), Some(p2)) = (
            tournament_select(scored, config.tournament_size, rng),
            tournament_select(scored, config.tournament_size, rng),
        ) else {
            break;
        };
        let child = crossover(&p1.weights, &p2.weights, rng);
        next.push(mutate(&child, config.mutation_rate, rng));
    }
    next.truncate(config.population_size);
    next
}

/// Drives the evolution loop for one configuration.
pub struct GeneticTuner {
    config: TunerConfig,
    rng: StdRng,
}

impl GeneticTuner {
    pub fn new(config: TunerConfig) -> Result<Self, TunerError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    pub fn fitness(&self, weights: &HeuristicWeights) -> f64 {
        evaluate_fitness(
            weights,
            self.config.games_per_individual,
            self.config.max_moves,
            self.config.grid_size,
            self.config.base_seed,
        )
    }

    /// Runs every generation and returns the best vector seen overall.
    pub fn run(&mut self) -> EvolutionResult {
        let mut population = initialize_population(self.config.population_size, &mut self.rng);
        let mut best = Individual {
            weights: population.first().copied().unwrap_or_default(),
            fitness: f64::NEG_INFINITY,
        };
        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            let mut scored: Vec<Individual> = population
                .iter()
                .map(|w| {
                    let fitness = self.fitness(w);
                    debug!(weights = %w, fitness, "evaluated individual");
                    Individual { weights: *w, fitness }
                })
                .collect();

            let Some(gen_best) = scored.iter().copied().max_by(|a, b| a.fitness.total_cmp(&b.fitness)) else {
                break;
            };
            let avg_fitness = scored.iter().map(|i| i.fitness).sum::<f64>() / scored.len() as f64;
            if gen_best.fitness > best.fitness {
                best = gen_best;
            }

            info!(
                generation = generation + 1,
                best = gen_best.fitness,
                avg = avg_fitness,
                weights = %gen_best.weights,
                "generation complete"
            );
            history.push(GenerationStats {
                generation: generation + 1,
                best_fitness: gen_best.fitness,
                avg_fitness,
                best_weights: gen_best.weights,
            });

            if generation + 1 < self.config.generations {
                population = next_generation(&mut scored, &self.config, &mut self.rng);
            }
        }

        EvolutionResult {
            best_weights: best.weights,
            best_fitness: best.fitness,
            history,
            params: self.config.clone(),
        }
    }
}

/// Validates `config`, then evolves.
pub fn evolve_weights(config: TunerConfig) -> Result<EvolutionResult, TunerError> {
    Ok(GeneticTuner::new(config)?.run())
}

#[cfg(test)]
#[path = "genetic_tests.rs"]
mod genetic_tests;
