//! Darwin - Entry Point
//!
//! Runs the built-in demo or a scenario file and prints the board after every
//! round, either as text or as a single JSON document.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use darwin::core::error::Result;
use darwin::render::render_board;
use darwin::scenario::{library, Scenario};
use darwin::simulation::RoundReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Darwin world simulator
#[derive(Parser, Debug)]
#[command(name = "darwin")]
#[command(about = "Run a Darwin world and print the board after every round")]
struct Args {
    /// Scenario file (TOML); runs the built-in 8x8 demo when omitted
    #[arg(long, short = 's')]
    scenario: Option<PathBuf>,

    /// Number of rounds (overrides the scenario)
    #[arg(long, short = 'n')]
    rounds: Option<u32>,

    /// Seed for if_random (overrides the scenario)
    #[arg(long)]
    seed: Option<u64>,

    /// Instructions a creature may fetch in one turn (overrides the scenario)
    #[arg(long)]
    step_budget: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the built-in species programs and exit
    #[arg(long)]
    list_species: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunOutput {
    seed: u64,
    rounds: u32,
    initial_board: String,
    final_board: String,
    reports: Vec<RoundReport>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("darwin=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(internal = e.is_internal(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if args.list_species {
        for (name, _, _) in library::LIBRARY {
            let species = library::species(name)?;
            println!("{} ({})", name, species.symbol());
            print!("{}", species.listing());
            println!();
        }
        return Ok(());
    }

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::demo()?,
    };

    if let Some(rounds) = args.rounds {
        scenario.config.rounds = rounds;
    }
    if let Some(seed) = args.seed {
        scenario.config.seed = seed;
    }
    if let Some(budget) = args.step_budget {
        scenario.config.step_budget = budget;
    }

    let mut sim = scenario.into_simulation()?;
    let rounds = sim.config().rounds;
    let seed = sim.config().seed;
    tracing::info!(rounds, seed, "Darwin starting...");

    match args.format {
        Format::Text => {
            sim.run(rounds, |round, world| {
                println!("Turn = {}.", round);
                println!("{}", render_board(world));
            })?;
        }
        Format::Json => {
            let initial_board = render_board(sim.world());
            let reports = sim.run(rounds, |_, _| {})?;
            let output = RunOutput {
                seed,
                rounds,
                initial_board,
                final_board: render_board(sim.world()),
                reports,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
