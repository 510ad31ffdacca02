//! Tabular Q-learning maze solver
//!
//! This crate provides:
//! - Procedural maze generation with a solvability guarantee and a
//!   stochastic loosening pass that opens alternate routes
//! - An epsilon-greedy Q-learning core over a dense (action, row, col)
//!   value table
//! - A training pipeline with composable observers and trajectory capture
//! - CSV export of grids and trajectories for external plotting tooling
//! - Versioned persistence of trained agents
//!
//! Execution is single-threaded and synchronous. [`q_learning::QTable`]
//! and [`maze::Grid`] are not safe for concurrent mutation from multiple
//! threads without external synchronization.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod export;
pub mod maze;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod reward;
pub mod types;

pub use error::{Error, Result};
pub use maze::{Cell, Grid, MazeGenerator};
pub use pipeline::{Trainer, TrainerConfig, TrainingResult};
pub use q_learning::{EpsilonGreedy, QLearningAgent, QTable};
pub use types::{Action, Position, TrajectoryRecord};
