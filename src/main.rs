//! Skirmish - Entry Point
//!
//! Reads a scenario file, applies its commands, drives the simulation loop
//! to termination, and prints the resulting event log.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use skirmish::core::error::Result;
use skirmish::io::scenario::parse_scenario;
use skirmish::runner::{SimulationRunner, MAX_SIMULATION_TICKS};

/// Turn-based grid combat simulator
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run a combat scenario file and print the resulting events")]
struct Args {
    /// Path to the scenario file
    scenario: PathBuf,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum ticks before the simulation is cut off
    #[arg(long, default_value_t = MAX_SIMULATION_TICKS)]
    max_ticks: u64,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so the event output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter("skirmish=info")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        "running scenario {} with seed {}",
        args.scenario.display(),
        seed
    );

    let file = File::open(&args.scenario)?;
    let commands = parse_scenario(BufReader::new(file))?;

    let mut runner = SimulationRunner::new(seed).with_max_ticks(args.max_ticks);
    runner.apply_all(commands)?;
    runner.run()?;

    match args.format.as_str() {
        "json" => {
            for record in runner.events() {
                println!("{}", serde_json::to_string(record)?);
            }
        }
        "text" => {
            for record in runner.events() {
                println!("{}", record);
            }
        }
        other => {
            tracing::warn!("unknown format {:?}, defaulting to text", other);
            for record in runner.events() {
                println!("{}", record);
            }
        }
    }
    Ok(())
}
