//! qmaze CLI - Maze generation and tabular Q-learning toolkit
//!
//! This CLI provides a unified interface for:
//! - Generating procedural mazes
//! - Training Q-learning agents on them
//! - Evaluating learned policies with greedy rollouts

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qmaze")]
#[command(version, about = "Maze generation and tabular Q-learning toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a Q-learning agent on a generated or loaded maze
    Train(qmaze::cli::commands::train::TrainArgs),

    /// Generate a maze and optionally write it to CSV
    Generate(qmaze::cli::commands::generate::GenerateArgs),

    /// Evaluate a trained agent on a grid with a greedy rollout
    Evaluate(qmaze::cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => qmaze::cli::commands::train::execute(args),
        Commands::Generate(args) => qmaze::cli::commands::generate::execute(args),
        Commands::Evaluate(args) => qmaze::cli::commands::evaluate::execute(args),
    }
}
