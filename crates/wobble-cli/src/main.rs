//! Wobble CLI: run, validate and inspect soft-body simulations.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod scenario;

#[derive(Parser)]
#[command(name = "wobble")]
#[command(version, about = "Wobble: spring-mass soft-body mesh deformation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a scenario file.
    Simulate {
        /// Path to scenario config (TOML).
        #[arg(short, long, default_value = "scenario.toml")]
        config: String,

        /// Write the final state snapshot to this path.
        #[arg(short, long)]
        snapshot: Option<String>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a scenario or mesh file.
    Validate {
        /// Path to a scenario (.toml) or mesh (.json).
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { config, snapshot } => commands::simulate(&config, snapshot.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
