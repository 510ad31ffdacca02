//! Post-training analysis of episode statistics

pub mod stats;

pub use stats::{halfway_improvement, EpisodeStats};
