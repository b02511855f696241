use super::*;

fn scored(fitnesses: &[f64]) -> Vec<Individual> {
    fitnesses
        .iter()
        .enumerate()
        .map(|(i, &fitness)| Individual {
            weights: HeuristicWeights::from_array([i as f64 + 1.0; HeuristicWeights::LEN]),
            fitness,
        })
        .collect()
}

fn small_config(seed: u64) -> TunerConfig {
    TunerConfig {
        population_size: 4,
        generations: 2,
        elite_size: 1,
        games_per_individual: 1,
        max_moves: 30,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn initial_population_respects_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    let pop = initialize_population(50, &mut rng);
    assert_eq!(pop.len(), 50);
    for w in pop {
        for (g, (lo, hi)) in w.to_array().into_iter().zip(GENE_BOUNDS) {
            assert!(g >= lo && g <= hi, "{g} outside [{lo}, {hi}]");
        }
    }
}

#[test]
fn crossover_takes_a_prefix_and_a_suffix() {
    let a = HeuristicWeights::from_array([1.0; 5]);
    let b = HeuristicWeights::from_array([2.0; 5]);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let child = crossover(&a, &b, &mut rng).to_array();
        let cut = child.iter().position(|&g| g == 2.0).unwrap();
        assert!((1..5).contains(&cut));
        assert!(child[..cut].iter().all(|&g| g == 1.0));
        assert!(child[cut..].iter().all(|&g| g == 2.0));
    }
}

#[test]
fn zero_rate_mutation_only_clamps() {
    let mut rng = StdRng::seed_from_u64(5);
    let w = HeuristicWeights::from_array([0.0, 3.0, -1.0, 40.0, 0.05]);
    let out = mutate(&w, 0.0, &mut rng).to_array();
    assert_eq!(out, [MIN_GENE, 3.0, MIN_GENE, 40.0, MIN_GENE]);
}

#[test]
fn full_rate_mutation_keeps_genes_above_floor() {
    let mut rng = StdRng::seed_from_u64(9);
    let w = HeuristicWeights::from_array([0.2; 5]);
    for _ in 0..100 {
        assert!(mutate(&w, 1.0, &mut rng).to_array().iter().all(|&g| g >= MIN_GENE));
    }
}

#[test]
fn tournament_of_whole_population_picks_the_best() {
    let pop = scored(&[3.0, 9.0, 1.0]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(tournament_select(&pop, 3, &mut rng).unwrap().fitness, 9.0);
    assert!(tournament_select(&[], 3, &mut rng).is_none());
}

#[test]
fn next_generation_keeps_elite_first() {
    let mut pop = scored(&[5.0, 50.0, 20.0, 1.0]);
    let config = TunerConfig {
        population_size: 4,
        elite_size: 2,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(2);
    let next = next_generation(&mut pop, &config, &mut rng);
    assert_eq!(next.len(), 4);
    assert_eq!(next[0], HeuristicWeights::from_array([2.0; 5]));
    assert_eq!(next[1], HeuristicWeights::from_array([3.0; 5]));
}

#[test]
fn run_records_one_entry_per_generation() {
    let result = evolve_weights(small_config(11)).unwrap();
    assert_eq!(result.history.len(), 2);
    assert_eq!(result.history[0].generation, 1);
    assert_eq!(result.history[1].generation, 2);
    for stats in &result.history {
        assert!(stats.best_fitness >= stats.avg_fitness);
        assert!(result.best_fitness >= stats.best_fitness);
    }
    assert_eq!(result.params, small_config(11));
}

#[test]
fn seeded_runs_are_reproducible() {
    let a = evolve_weights(small_config(21)).unwrap();
    let b = evolve_weights(small_config(21)).unwrap();
    assert_eq!(a.best_weights, b.best_weights);
    assert_eq!(a.best_fitness, b.best_fitness);
}

#[test]
fn invalid_config_is_rejected_before_running() {
    let config = TunerConfig {
        population_size: 1,
        ..Default::default()
    };
    assert!(matches!(evolve_weights(config), Err(TunerError::InvalidParameter(_))));
}
