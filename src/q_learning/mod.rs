//! Epsilon-greedy Q-learning over the maze grid
//!
//! This module implements the learning core: a dense Q-table indexed by
//! (action, row, col), an epsilon-greedy policy over the fixed action set,
//! and the agent that applies the temporal difference update once per step.
//!
//! ## Update rule
//!
//! The update is the standard Q-learning temporal difference form with the
//! learning rate fixed at 1.0:
//!
//! ```text
//! Q(s,a) += r + gamma * (max_a' Q(s',a') - Q(s,a))
//! ```
//!
//! An invalid move leaves the agent in place but still incurs the penalty
//! and still updates the table, bootstrapping from the current state
//! itself. Preserve this exact form; substituting a learning-rate blend
//! changes observable training behavior.
//!
//! ## Usage Example
//!
//! ```no_run
//! use qmaze::maze::MazeGenerator;
//! use qmaze::pipeline::{Trainer, TrainerConfig};
//! use qmaze::q_learning::QLearningAgent;
//!
//! let grid = MazeGenerator::with_seed(7).generate(13, 13, 0.3).unwrap();
//! let config = TrainerConfig::default();
//! let mut agent = QLearningAgent::new(&grid);
//! let result = Trainer::new(config).unwrap().run(&mut agent, &grid).unwrap();
//! println!("trained over {} steps", result.total_steps);
//! ```

pub mod agent;
pub mod policy;
pub mod q_table;
pub mod serialization;

pub use agent::QLearningAgent;
pub use policy::EpsilonGreedy;
pub use q_table::QTable;
pub use serialization::{SavedAgent, TrainingMetadata};
