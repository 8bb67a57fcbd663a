use cascade_slots::config::{DEFAULT_MAX_ROUNDS, DEFAULT_MIN_CLUSTER, DEFAULT_SIDE};
use cascade_slots::simulate::run_simulation;
use cascade_slots::spin::SpinEngine;
use cascade_slots::variants::vegetable_fiesta;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run a batch of seeded Vegetable Fiesta spins and report aggregate statistics.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of spins to run
    #[clap(short = 'n', long, default_value_t = 10_000)]
    spins: u64,

    /// Seed of the first spin; spin i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Board side length
    #[clap(long, default_value_t = DEFAULT_SIDE)]
    side: usize,

    /// Minimum number of cells in a winning cluster
    #[clap(long, default_value_t = DEFAULT_MIN_CLUSTER)]
    min_cluster: usize,

    /// Abort a spin after this many collapses
    #[clap(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Print the statistics as JSON
    #[clap(long)]
    json: bool,
}

fn run(args: &Args) -> Result<(), String> {
    let config = vegetable_fiesta::config()
        .with_side(args.side)
        .and_then(|c| c.with_min_cluster(args.min_cluster))
        .and_then(|c| c.with_max_rounds(args.max_rounds))
        .map_err(|e| format!("Invalid configuration: {}", e))?;
    let engine = SpinEngine::new(config);

    info!(spins = args.spins, seed = args.seed, "starting simulation");
    let stats = run_simulation(&engine, args.spins, args.seed)
        .map_err(|e| format!("Simulation failed: {}", e))?;

    if args.json {
        let json = serde_json::to_string_pretty(&stats)
            .map_err(|e| format!("Failed to serialize statistics: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("--- Simulation Complete ---");
    println!("Spins:              {}", stats.spins);
    println!("Hit rate:           {:.4}", stats.hit_rate());
    println!("Mean multiplier:    {:.4}", stats.mean_multiplier());
    println!("Max multiplier:     {:.2}", stats.max_multiplier);
    println!("Mean cascades:      {:.4}", stats.mean_cascades());
    println!("Longest cascade:    {}", stats.max_cascades);
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
