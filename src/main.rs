use anyhow::{Context, Result};
use clap::Parser;
use gate_activity::activity::EstimatorConfig;
use gate_activity::netlist::read_netlist;
use gate_activity::report::Report;
use gate_activity::stimulus::read_stimulus;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Truth tables and switching-activity estimates for NOT/AND netlists
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Netlist describing the circuit
    netlist: PathBuf,

    /// Stimulus file, three input probabilities per line
    stimulus: PathBuf,

    /// Monte Carlo trials per probability vector
    #[arg(default_value_t = 1000)]
    trials: usize,

    /// Seed for reproducible estimates
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Both files are read before anything is simulated
    let circuit = read_netlist(&cli.netlist).context("Failed to load netlist")?;
    let vectors = read_stimulus(&cli.stimulus).context("Failed to load stimulus")?;

    let config = EstimatorConfig {
        trials: cli.trials,
        seed: cli.seed,
    };
    info!(trials = config.trials, seed = ?config.seed, "starting run");
    let report = Report::run(
        &circuit,
        cli.netlist.display().to_string(),
        &vectors,
        &config,
    )?;

    if wants_json(&cli) {
        #[cfg(feature = "serde")]
        gate_activity::report::report_serialize(&report, std::io::stdout().lock())?;
        println!();
    } else {
        print!("{report}");
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn wants_json(cli: &Cli) -> bool {
    cli.json
}

#[cfg(not(feature = "serde"))]
fn wants_json(_cli: &Cli) -> bool {
    false
}
