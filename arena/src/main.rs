//! Arena - command-line driver for the Connect Four search engine
//!
//! Builds a position, runs a UCT search over it, and prints the chosen
//! column; `--selfplay` instead pits the engine against itself move by
//! move until the game ends.

use anyhow::{Context, Result};
use clap::Parser;
use game_core::GameState;
use games_connect4::Connect4;
use mcts::{MctsConfig, MctsSearch, RandomRollout, SearchResult};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "arena", about = "UCT Connect Four player")]
struct Args {
    /// Simulations per decision
    #[arg(long, default_value_t = 1000)]
    simulations: u32,

    /// Exploration constant for the UCT formula
    #[arg(long, default_value_t = std::f32::consts::SQRT_2)]
    exploration: f32,

    /// Seed for the search RNG
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Columns to pre-play from the empty board, e.g. "3,3,4"
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// Print per-column visit counts and mean scores
    #[arg(long)]
    verbose: bool,

    /// Play the engine against itself until the game ends
    #[arg(long)]
    selfplay: bool,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = MctsConfig::default()
        .with_simulations(args.simulations)
        .with_exploration(args.exploration);
    let mut rng = ChaCha20Rng::seed_from_u64(args.seed);

    let mut state = Connect4::new();
    for &col in &args.moves {
        state = state
            .apply(col)
            .with_context(|| format!("pre-played move in column {col}"))?;
    }

    info!(
        simulations = config.simulations,
        exploration = config.exploration,
        seed = args.seed,
        "arena starting"
    );

    if args.selfplay {
        play_out(state, &config, &mut rng, args.verbose)
    } else {
        decide_once(state, &config, &mut rng, args.verbose)
    }
}

/// Run one search from `state` and print the outcome.
fn decide_once(
    state: Connect4,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
    verbose: bool,
) -> Result<()> {
    print!("{state}");
    let result = search(state, config, rng);
    report(&result, verbose);
    Ok(())
}

/// Alternate searches for both sides until the game ends.
fn play_out(
    mut state: Connect4,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
    verbose: bool,
) -> Result<()> {
    let mut moves = 0u32;

    while !state.is_terminal() {
        let result = search(state, config, rng);
        let Some(col) = result.decision else { break };

        info!(player = %state.current_player(), column = col, "move chosen");
        state = state
            .apply(col)
            .context("engine chose an invalid column")?;
        moves += 1;

        print!("{state}");
        report(&result, verbose);
        println!();
    }

    let score = state.score();
    if score > 0.0 {
        println!("Player 1 (x) wins after {moves} moves.");
    } else if score < 0.0 {
        println!("Player 2 (o) wins after {moves} moves.");
    } else {
        println!("Draw after {moves} moves.");
    }
    Ok(())
}

fn search(state: Connect4, config: &MctsConfig, rng: &mut ChaCha20Rng) -> SearchResult<usize> {
    MctsSearch::new(state, &RandomRollout, config.clone()).run(rng)
}

fn report(result: &SearchResult<usize>, verbose: bool) {
    match result.decision {
        Some(col) => println!("Next move: column {col}"),
        None => println!("No decision: no simulations, or the position is already decided."),
    }
    if verbose {
        for stats in &result.stats {
            println!(
                "{}: {:4} visits, avg score {:+.3}",
                stats.action, stats.visits, stats.mean_score
            );
        }
    }
}
