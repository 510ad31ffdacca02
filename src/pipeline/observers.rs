//! Observer implementations for training pipelines

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{ports::Observer, Result};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    total_steps: usize,
    episodes_done: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            total_steps: 0,
            episodes_done: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, steps: usize) -> Result<()> {
        self.total_steps += steps;
        self.episodes_done += 1;

        if let Some(pb) = &self.progress_bar {
            pb.set_position((episode + 1) as u64);
            let avg = self.total_steps as f64 / self.episodes_done as f64;
            pb.set_message(format!("avg {avg:.1} steps"));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            let avg = if self.episodes_done > 0 {
                self.total_steps as f64 / self.episodes_done as f64
            } else {
                0.0
            };
            pb.finish_with_message(format!("avg {avg:.1} steps"));
        }
        Ok(())
    }
}

/// Metrics observer - Tracks episode-length metrics during training
pub struct MetricsObserver {
    episode_lengths: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            episode_lengths: Vec::new(),
        }
    }

    /// Total steps observed so far
    pub fn total_steps(&self) -> usize {
        self.episode_lengths.iter().sum()
    }

    /// Average episode length so far
    pub fn average_episode_length(&self) -> f64 {
        if self.episode_lengths.is_empty() {
            0.0
        } else {
            self.total_steps() as f64 / self.episode_lengths.len() as f64
        }
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            episodes: self.episode_lengths.len(),
            total_steps: self.total_steps(),
            average_episode_length: self.average_episode_length(),
            shortest_episode: self.episode_lengths.iter().min().copied(),
            longest_episode: self.episode_lengths.iter().max().copied(),
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, steps: usize) -> Result<()> {
        self.episode_lengths.push(steps);
        Ok(())
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub episodes: usize,
    pub total_steps: usize,
    pub average_episode_length: f64,
    pub shortest_episode: Option<usize>,
    pub longest_episode: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_observer() {
        let mut observer = MetricsObserver::new();

        assert_eq!(observer.average_episode_length(), 0.0);

        observer.on_episode_end(0, 30).unwrap();
        observer.on_episode_end(1, 20).unwrap();
        observer.on_episode_end(2, 10).unwrap();

        let summary = observer.summary();
        assert_eq!(summary.episodes, 3);
        assert_eq!(summary.total_steps, 60);
        assert_eq!(summary.average_episode_length, 20.0);
        assert_eq!(summary.shortest_episode, Some(10));
        assert_eq!(summary.longest_episode, Some(30));
    }
}
