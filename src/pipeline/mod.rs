//! Training pipeline
//!
//! [`Trainer`] drives episodes of Q-learning against a grid, fanning
//! training events out to composable [`crate::ports::Observer`]s and
//! accumulating the trajectory log handed to downstream tooling.

pub mod observers;
pub mod training;

pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use training::{Trainer, TrainerConfig, TrainingResult};
