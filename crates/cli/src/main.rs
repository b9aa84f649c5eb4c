mod commands;
mod loader;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{EvaluateCommand, SpinCommand, ValidateCommand};
use tracing_subscriber::EnvFilter;

/// Ruleta CLI - wheel campaign inspection and spin simulation
#[derive(Debug, Parser)]
#[command(
    name = "ruleta",
    version,
    about = "Wheel campaign inspection and spin simulation tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate which wheel a store would show at a given instant
    Evaluate(EvaluateCommand),
    /// Simulate a spin against the active wheel
    Spin(SpinCommand),
    /// Validate wheel configuration files
    Validate(ValidateCommand),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ruleta_core=warn".parse()?))
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Evaluate(cmd) => cmd.execute()?,
        Commands::Spin(cmd) => cmd.execute()?,
        Commands::Validate(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
