//! Generate command - Produce a maze without training

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{export::write_grid_csv, maze::MazeGenerator};

#[derive(Parser, Debug)]
#[command(about = "Generate a maze and optionally write it to CSV")]
pub struct GenerateArgs {
    /// Maze height (rounded up to odd)
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Maze width (rounded up to odd)
    #[arg(long, default_value_t = 25)]
    pub width: usize,

    /// Probability that a residual wall is opened after carving
    #[arg(long, default_value_t = 0.7)]
    pub loosen: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the grid wire encoding to a CSV file
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let mut generator = match args.seed {
        Some(seed) => MazeGenerator::with_seed(seed),
        None => MazeGenerator::new(),
    };
    let grid = generator.generate(args.height, args.width, args.loosen)?;

    print!("{grid}");
    println!(
        "\n{}x{}, start {}, goal {}",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.goal()
    );
    match grid.shortest_path_len() {
        Some(len) => println!("Shortest path: {len} steps"),
        None => println!("Goal unreachable (this should not happen for generated mazes)"),
    }

    if let Some(ref path) = args.output {
        write_grid_csv(path, &grid)?;
        println!("Grid written to {}", path.display());
    }

    Ok(())
}
