//! play2048 CLI
//!
//! Play 2048 with any registered solver, or by hand.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use arena::{AsciiRenderer, GameOutcome, GameRecord, GameRunner, RunConfig, SessionResults, SolverRegistry};
use clap::Parser;
use game_core::{Direction, GameState, SolverConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "play2048", version, about = "Play 2048 with a solver or by hand")]
struct Cli {
    /// Solver name (see --list)
    #[arg(short, long, default_value = "expectimax")]
    player: String,
    /// Seed for tile spawns and solver randomness
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of games
    #[arg(short, long, default_value_t = 1)]
    games: u32,
    /// Move attempts per game, no-ops included
    #[arg(long, default_value_t = 10_000)]
    max_moves: u32,
    /// Board side length
    #[arg(long, default_value_t = game_core::DEFAULT_SIZE)]
    size: usize,
    /// TOML file with solver parameters
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Write session results as JSON
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Print the board after every move
    #[arg(long)]
    show: bool,
    /// List registered solvers and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let registry = SolverRegistry::with_default_solvers();

    if cli.list {
        println!("Solvers:");
        for name in registry.names() {
            println!("  {}", name);
        }
        return Ok(());
    }

    let solver_config = match &cli.config {
        Some(path) => SolverConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => SolverConfig::default(),
    };
    let mut solver = registry.create(&cli.player, &solver_config, cli.seed)?;

    let run_config = RunConfig {
        num_games: cli.games,
        max_moves: cli.max_moves,
        grid_size: cli.size,
        seed: cli.seed,
        verbose: true,
    };
    let mut session = SessionResults::new(solver.name(), run_config.clone());

    if solver.name() == "human" {
        for game_num in 0..run_config.num_games {
            let seed = run_config.seed.map(|s| s.wrapping_add(u64::from(game_num)));
            session.add_game(play_interactive(&run_config, seed)?);
        }
    } else {
        let runner = GameRunner::new(run_config);
        let mut renderer = AsciiRenderer::new(cli.size);
        let show = cli.show;
        let records = runner.run_with(solver.as_mut(), |game, dir, outcome| {
            if show && outcome.moved {
                println!("{} -> score {}\n{}\n", dir, game.score(), renderer.render(game.grid()));
            }
        });
        for record in records {
            session.add_game(record);
        }
    }

    println!("{}", session.generate_report());
    if let Some(path) = &cli.output {
        session
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

/// Keyboard play on stdin: w/a/s/d or a direction name, q to quit.
fn play_interactive(config: &RunConfig, seed: Option<u64>) -> anyhow::Result<GameRecord> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut game = GameState::new(config.grid_size, &mut rng);
    let mut renderer = AsciiRenderer::new(config.grid_size);
    let (mut moves, mut no_op_moves) = (0, 0);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let outcome = loop {
        println!("Score: {}\n{}", game.score(), renderer.render(game.grid()));
        if game.is_terminal() {
            break GameOutcome::GameOver;
        }
        if moves >= config.max_moves {
            break GameOutcome::MoveCap;
        }
        print!("move> ");
        io::stdout().flush().context("flushing stdout")?;

        let Some(line) = lines.next() else {
            break GameOutcome::NoMove;
        };
        let input = line.context("reading stdin")?;
        let dir = match input.trim() {
            "q" | "quit" => break GameOutcome::NoMove,
            "w" => Direction::Up,
            "a" => Direction::Left,
            "s" => Direction::Down,
            "d" => Direction::Right,
            other => match other.parse::<Direction>() {
                Ok(dir) => dir,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
        };

        moves += 1;
        if !game.apply_move(dir, &mut rng).moved {
            no_op_moves += 1;
        }
    };

    Ok(GameRecord::from_game(&game, moves, no_op_moves, outcome))
}
