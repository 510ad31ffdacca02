//! Train command - Train a Q-learning agent on a maze

use std::{fs::File, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    analysis::{halfway_improvement, EpisodeStats},
    export::{read_grid_csv, write_grid_csv, write_trajectories},
    maze::{Grid, MazeGenerator},
    pipeline::{ProgressObserver, Trainer, TrainerConfig, TrainingResult},
    q_learning::{QLearningAgent, SavedAgent, TrainingMetadata},
};

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent on a generated or loaded maze")]
pub struct TrainArgs {
    /// Maze height (rounded up to odd)
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Maze width (rounded up to odd)
    #[arg(long, default_value_t = 25)]
    pub width: usize,

    /// Probability that a residual wall is opened after carving
    #[arg(long, default_value_t = 0.7)]
    pub loosen: f64,

    /// Load a wire-encoded grid CSV instead of generating a maze
    #[arg(long, conflicts_with_all = ["height", "width", "loosen"])]
    pub grid: Option<PathBuf>,

    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub episodes: usize,

    /// Exploration rate (0.0-1.0)
    #[arg(long, default_value_t = 0.3)]
    pub epsilon: f64,

    /// Discount factor (0.0-1.0)
    #[arg(long, default_value_t = 0.99)]
    pub gamma: f64,

    /// Optional per-episode step cap (default: unbounded)
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file for the trained agent (MessagePack)
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Write visited positions to a CSV file
    #[arg(long)]
    pub trajectories: Option<PathBuf>,

    /// Write the grid wire encoding to a CSV file
    #[arg(long)]
    pub grid_csv: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,

    /// Greedy rollout after training to check the learned policy
    #[arg(long, default_value_t = false)]
    pub rollout: bool,

    /// Step limit for the post-training rollout
    #[arg(long, default_value_t = 10_000)]
    pub rollout_steps: usize,
}

#[derive(Debug, Serialize)]
struct GridSummary {
    rows: usize,
    cols: usize,
    shortest_path: Option<usize>,
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    episodes: usize,
    total_steps: usize,
    reached_goal: usize,
    average_episode_length: f64,
    episode_stats: Option<EpisodeStats>,
    halfway_improvement: Option<f64>,
    grid: GridSummary,
    config: TrainerConfig,
}

fn build_grid(args: &TrainArgs) -> Result<Grid> {
    if let Some(ref path) = args.grid {
        let grid = read_grid_csv(path)?;
        // Generated mazes are solvable by construction; a hand-built grid
        // is not, and training on an unreachable goal never terminates.
        if !grid.goal_reachable() {
            return Err(anyhow!(
                "grid at {} has no path from start to goal; training would not terminate",
                path.display()
            ));
        }
        Ok(grid)
    } else {
        let mut generator = match args.seed {
            Some(seed) => MazeGenerator::with_seed(seed),
            None => MazeGenerator::new(),
        };
        Ok(generator.generate(args.height, args.width, args.loosen)?)
    }
}

fn report_rollout(agent: &QLearningAgent, grid: &Grid, max_steps: usize) {
    println!("\n=== Greedy Rollout ===");
    match agent.greedy_rollout(grid, max_steps) {
        Some(path) => {
            let steps = path.len() - 1;
            println!("Reached the goal in {steps} steps");
            if let Some(shortest) = grid.shortest_path_len() {
                if steps == shortest {
                    println!("Path is optimal (shortest path: {shortest})");
                } else {
                    println!("Shortest possible path: {shortest}");
                }
            }
        }
        None => println!("Greedy policy did not reach the goal within {max_steps} steps"),
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let grid = build_grid(&args)?;

    let config = TrainerConfig {
        num_episodes: args.episodes,
        epsilon: args.epsilon,
        gamma: args.gamma,
        max_steps: args.max_steps,
        seed: args.seed,
    };

    let mut trainer = Trainer::new(config.clone())?;
    if args.progress {
        trainer = trainer.with_observer(Box::new(ProgressObserver::new()));
    }

    let mut agent = QLearningAgent::new(&grid);
    let result = trainer.run(&mut agent, &grid)?;

    print_report(&grid, &result);

    if args.rollout {
        report_rollout(&agent, &grid, args.rollout_steps);
    }

    if let Some(ref path) = args.trajectories {
        write_trajectories(path, &result.trajectory)?;
        println!("\nTrajectories written to {}", path.display());
    }

    if let Some(ref path) = args.grid_csv {
        write_grid_csv(path, &grid)?;
        println!("Grid written to {}", path.display());
    }

    if let Some(ref path) = args.summary {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let summary = TrainingSummaryFile {
            episodes: result.episodes,
            total_steps: result.total_steps,
            reached_goal: result.reached_goal,
            average_episode_length: result.average_episode_length(),
            episode_stats: EpisodeStats::from_lengths(&result.episode_lengths),
            halfway_improvement: halfway_improvement(&result.episode_lengths),
            grid: GridSummary {
                rows: grid.rows(),
                cols: grid.cols(),
                shortest_path: grid.shortest_path_len(),
            },
            config: config.clone(),
        };

        let file = File::create(path)?;
        to_writer_pretty(file, &summary)?;
        println!("Summary written to {}", path.display());
    }

    if let Some(ref path) = args.output {
        let metadata = TrainingMetadata {
            episodes_trained: Some(result.episodes),
            grid_rows: grid.rows(),
            grid_cols: grid.cols(),
            seed: args.seed,
        };
        let saved = SavedAgent::from_agent(&agent, config.epsilon, config.gamma, metadata);
        match saved.save_to_file(path) {
            Ok(()) => println!("Agent saved to {}", path.display()),
            Err(e) => eprintln!("Error saving agent: {e:#}"),
        }
    }

    Ok(())
}

fn print_report(grid: &Grid, result: &TrainingResult) {
    println!("\n=== Training Complete ===");
    println!("Grid: {}x{}", grid.rows(), grid.cols());
    println!("Episodes: {}", result.episodes);
    println!("Total steps: {}", result.total_steps);
    if result.reached_goal < result.episodes {
        println!(
            "Episodes reaching the goal: {}/{}",
            result.reached_goal, result.episodes
        );
    }

    if let Some(stats) = EpisodeStats::from_lengths(&result.episode_lengths) {
        println!(
            "Episode length: mean {:.1}, median {:.1}, min {}, max {}",
            stats.mean, stats.median, stats.min, stats.max
        );
    }
    if let Some(improvement) = halfway_improvement(&result.episode_lengths) {
        println!("First-half/second-half length ratio: {improvement:.2}");
    }
}
