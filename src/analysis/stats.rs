//! Descriptive statistics over episode lengths

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

/// Summary statistics for the lengths of a training run's episodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub episodes: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl EpisodeStats {
    /// Compute statistics from episode lengths; `None` for an empty slice.
    pub fn from_lengths(lengths: &[usize]) -> Option<Self> {
        if lengths.is_empty() {
            return None;
        }

        let mut data = Data::new(lengths.iter().map(|&len| len as f64).collect::<Vec<_>>());
        Some(Self {
            episodes: lengths.len(),
            mean: data.mean().unwrap_or(0.0),
            std_dev: data.std_dev().unwrap_or(0.0),
            median: data.median(),
            min: data.min(),
            max: data.max(),
        })
    }
}

/// Ratio of the first half's mean episode length to the second half's.
///
/// Values above 1.0 mean episodes got shorter as training went on, i.e.
/// the policy improved. `None` when there are fewer than two episodes.
pub fn halfway_improvement(lengths: &[usize]) -> Option<f64> {
    if lengths.len() < 2 {
        return None;
    }

    let mid = lengths.len() / 2;
    let first: usize = lengths[..mid].iter().sum();
    let second: usize = lengths[mid..].iter().sum();
    let first_mean = first as f64 / mid as f64;
    let second_mean = second as f64 / (lengths.len() - mid) as f64;

    if second_mean == 0.0 {
        return None;
    }
    Some(first_mean / second_mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lengths_yield_no_stats() {
        assert!(EpisodeStats::from_lengths(&[]).is_none());
    }

    #[test]
    fn test_basic_statistics() {
        let stats = EpisodeStats::from_lengths(&[10, 20, 30]).unwrap();
        assert_eq!(stats.episodes, 3);
        assert!((stats.mean - 20.0).abs() < 1e-9);
        assert!((stats.median - 20.0).abs() < 1e-9);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert!(stats.std_dev > 0.0);
    }

    #[test]
    fn test_halfway_improvement_detects_shrinking_episodes() {
        // Long early episodes, short late ones.
        let improvement = halfway_improvement(&[100, 80, 60, 12, 12, 12]).unwrap();
        assert!(improvement > 1.0);

        // No change.
        let flat = halfway_improvement(&[12, 12, 12, 12]).unwrap();
        assert!((flat - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_halfway_improvement_needs_two_episodes() {
        assert!(halfway_improvement(&[]).is_none());
        assert!(halfway_improvement(&[5]).is_none());
    }
}
