//! Evaluate command - Roll out a trained agent's greedy policy

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{export::read_grid_csv, q_learning::SavedAgent};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a trained agent on a grid with a greedy rollout")]
pub struct EvaluateArgs {
    /// Saved agent file (MessagePack)
    #[arg(long, short = 'a')]
    pub agent: PathBuf,

    /// Wire-encoded grid CSV the agent should be evaluated on
    #[arg(long, short = 'g')]
    pub grid: PathBuf,

    /// Step limit for the rollout
    #[arg(long, default_value_t = 10_000)]
    pub max_steps: usize,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let saved = SavedAgent::load_from_file(&args.agent)?;
    let grid = read_grid_csv(&args.grid)?;
    saved.check_grid(&grid)?;

    let agent = saved.to_agent()?;

    println!("Agent: {}", args.agent.display());
    println!(
        "Trained for {} episodes (epsilon {}, gamma {})",
        saved
            .metadata
            .episodes_trained
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string()),
        saved.epsilon,
        saved.gamma
    );

    match agent.greedy_rollout(&grid, args.max_steps) {
        Some(path) => {
            let steps = path.len() - 1;
            println!("Greedy policy reached the goal in {steps} steps");
            match grid.shortest_path_len() {
                Some(shortest) if steps == shortest => {
                    println!("Path is optimal (shortest path: {shortest})");
                }
                Some(shortest) => println!("Shortest possible path: {shortest}"),
                None => {}
            }
            Ok(())
        }
        None => Err(anyhow!(
            "greedy policy did not reach the goal within {} steps",
            args.max_steps
        )),
    }
}
