use cascade_slots::board::Board;
use cascade_slots::config::{DEFAULT_MAX_ROUNDS, DEFAULT_MIN_CLUSTER, DEFAULT_SIDE};
use cascade_slots::spin::{SpinEngine, SpinResult};
use cascade_slots::utils::read_board_file;
use cascade_slots::variants::vegetable_fiesta::{self, VegetableFiestaTile};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run one Vegetable Fiesta spin and print its cascade.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the tile generator
    #[clap(short, long, default_value_t = 514514)]
    seed: u64,

    /// Board side length
    #[clap(long, default_value_t = DEFAULT_SIDE)]
    side: usize,

    /// Minimum number of cells in a winning cluster
    #[clap(long, default_value_t = DEFAULT_MIN_CLUSTER)]
    min_cluster: usize,

    /// Abort the spin after this many collapses
    #[clap(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Cascade this board instead of dealing a random one (one row per line)
    #[clap(short, long)]
    board_file: Option<PathBuf>,

    /// Print the result as JSON
    #[clap(long)]
    json: bool,
}

fn print_trace(result: &SpinResult<VegetableFiestaTile>) {
    println!("Initial board:\n{}\n", result.initial_board());
    if result.steps().is_empty() {
        println!("No winning clusters.\n");
    }
    for (i, step) in result.steps().iter().enumerate() {
        let pays: Vec<String> = step.multipliers().iter().map(|m| format!("x{}", m)).collect();
        println!(
            "Cascade {}: {}",
            i + 1,
            if pays.is_empty() {
                "no pay".to_string()
            } else {
                pays.join(", ")
            }
        );
        println!("{}\n", step.board());
    }
    println!("Cascades: {}", result.cascade_count());
    println!("Total multiplier: {}", result.total_multiplier());
}

fn run(args: &Args) -> Result<(), String> {
    let config = vegetable_fiesta::config()
        .with_side(args.side)
        .and_then(|c| c.with_min_cluster(args.min_cluster))
        .and_then(|c| c.with_max_rounds(args.max_rounds))
        .map_err(|e| format!("Invalid configuration: {}", e))?;
    let engine = SpinEngine::new(config);
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let result = match &args.board_file {
        Some(path) => {
            let board: Board<VegetableFiestaTile> = read_board_file(path, args.side)?;
            engine.cascade(board, &mut rng)
        }
        None => engine.spin(&mut rng),
    }
    .map_err(|e| format!("Spin failed: {}", e))?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", json);
    } else {
        print_trace(&result);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
