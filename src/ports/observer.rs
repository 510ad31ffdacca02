//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events, allowing
//! composable data collection without coupling the training loop to
//! specific output formats or metrics.

use crate::{types::Position, Result};

/// Observer trait for monitoring training
///
/// Observers can be composed to collect different types of data during
/// training. Examples include:
/// - Progress bars for user feedback
/// - Metrics tracking for evaluation
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - For each visited position, including the start
///    - `on_episode_end(episode, steps)`
/// 3. `on_training_end()` - Once at the end
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts.
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each visited position, including the initial position of
    /// every episode (step 0).
    fn on_step(&mut self, _episode: usize, _step: usize, _position: Position) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends, with the number of steps it took.
    fn on_episode_end(&mut self, _episode: usize, _steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// Use this to finalize outputs or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
