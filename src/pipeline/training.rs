//! Episode loop and training configuration

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    maze::Grid,
    ports::Observer,
    q_learning::QLearningAgent,
    types::TrajectoryRecord,
    Error,
};

/// Hyperparameters for a training run.
///
/// All stochastic and numeric knobs live here rather than in ambient
/// globals; the trainer validates the whole struct before the first
/// episode starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Number of episodes to run.
    pub num_episodes: usize,

    /// Exploration rate in [0, 1]; constant for the whole run.
    pub epsilon: f64,

    /// Discount factor in [0, 1].
    pub gamma: f64,

    /// Optional per-episode step cap.
    ///
    /// By default an episode ends only when the goal is reached, so a grid
    /// with an unreachable goal never terminates. Setting a cap changes
    /// observable episode-length statistics, which is why it is opt-in
    /// rather than a default.
    pub max_steps: Option<usize>,

    /// Random seed applied to the agent's policy before training.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            num_episodes: 1000,
            epsilon: 0.3,
            gamma: 0.99,
            max_steps: None,
            seed: None,
        }
    }
}

impl TrainerConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero episode count or epsilon/gamma outside
    /// [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.num_episodes == 0 {
            return Err(Error::InvalidDimension {
                name: "num_episodes",
                value: self.num_episodes,
            });
        }
        for (name, value) in [("epsilon", self.epsilon), ("gamma", self.gamma)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::FractionOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Episodes completed.
    pub episodes: usize,

    /// Total steps taken across all episodes.
    pub total_steps: usize,

    /// Episodes that terminated at the goal (differs from `episodes` only
    /// when a step cap is configured).
    pub reached_goal: usize,

    /// Steps taken by each episode, in order.
    pub episode_lengths: Vec<usize>,

    /// Every visited position, one record per step including each
    /// episode's starting position.
    pub trajectory: Vec<TrajectoryRecord>,
}

impl TrainingResult {
    /// Average episode length.
    pub fn average_episode_length(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_steps as f64 / self.episodes as f64
        }
    }
}

/// Drives a full training run: episodes of select/reward/update until the
/// goal, sharing one Q-table across all episodes.
pub struct Trainer {
    config: TrainerConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl Trainer {
    /// Create a trainer, validating the configuration up front.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any training begins.
    pub fn new(config: TrainerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            observers: Vec::new(),
        })
    }

    /// Add an observer to the pipeline.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run all configured episodes from the grid's start cell.
    ///
    /// Each episode walks from start to goal, applying one Q-table update
    /// per step; the table carries over between episodes. Without a step
    /// cap an episode only ends at the goal, so callers supplying a
    /// hand-built grid should verify [`Grid::goal_reachable`] first.
    pub fn run(&mut self, agent: &mut QLearningAgent, grid: &Grid) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            agent.set_seed(seed);
        }

        let mut trajectory = Vec::new();
        let mut episode_lengths = Vec::with_capacity(self.config.num_episodes);
        let mut reached_goal = 0;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_episodes)?;
        }

        for episode in 0..self.config.num_episodes {
            for observer in &mut self.observers {
                observer.on_episode_start(episode)?;
            }

            let (steps, reached) = self.run_episode(agent, grid, episode, &mut trajectory)?;
            if reached {
                reached_goal += 1;
            }
            episode_lengths.push(steps);

            for observer in &mut self.observers {
                observer.on_episode_end(episode, steps)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult {
            episodes: self.config.num_episodes,
            total_steps: episode_lengths.iter().sum(),
            reached_goal,
            episode_lengths,
            trajectory,
        })
    }

    /// Run a single episode from the start cell, appending every visited
    /// position to `trajectory`.
    ///
    /// Returns the number of steps taken and whether the goal was reached
    /// (always true without a step cap, since that is the only terminal
    /// condition).
    fn run_episode(
        &mut self,
        agent: &mut QLearningAgent,
        grid: &Grid,
        episode: usize,
        trajectory: &mut Vec<TrajectoryRecord>,
    ) -> Result<(usize, bool)> {
        let mut position = grid.start();
        let mut step = 0;
        trajectory.push(TrajectoryRecord::new(episode, step, position));
        for observer in &mut self.observers {
            observer.on_step(episode, step, position)?;
        }

        while position != grid.goal() {
            if let Some(cap) = self.config.max_steps
                && step >= cap
            {
                break;
            }

            position = agent.step(position, grid, self.config.epsilon, self.config.gamma);
            step += 1;
            trajectory.push(TrajectoryRecord::new(episode, step, position));
            for observer in &mut self.observers {
                observer.on_step(episode, step, position)?;
            }
        }

        Ok((step, position == grid.goal()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn corridor() -> Grid {
        Grid::from_codes(&[vec![1, 0, 0, 2]]).unwrap()
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let mut config = TrainerConfig::default();
        config.num_episodes = 0;
        assert!(config.validate().is_err());

        let mut config = TrainerConfig::default();
        config.epsilon = 1.5;
        assert!(matches!(
            config.validate(),
            Err(Error::FractionOutOfRange { name: "epsilon", .. })
        ));

        let mut config = TrainerConfig::default();
        config.gamma = -0.1;
        assert!(matches!(
            config.validate(),
            Err(Error::FractionOutOfRange { name: "gamma", .. })
        ));
    }

    #[test]
    fn test_trainer_rejects_invalid_config_before_running() {
        let config = TrainerConfig {
            epsilon: 2.0,
            ..TrainerConfig::default()
        };
        assert!(Trainer::new(config).is_err());
    }

    #[test]
    fn test_episode_trajectory_starts_at_start_cell() {
        let grid = corridor();
        let config = TrainerConfig {
            num_episodes: 3,
            epsilon: 0.0,
            gamma: 0.99,
            max_steps: None,
            seed: Some(7),
        };
        let mut agent = QLearningAgent::new(&grid);
        let result = Trainer::new(config).unwrap().run(&mut agent, &grid).unwrap();

        assert_eq!(result.episodes, 3);
        assert_eq!(result.reached_goal, 3);
        for episode in 0..3 {
            let first = result
                .trajectory
                .iter()
                .find(|r| r.episode_index == episode)
                .unwrap();
            assert_eq!(first.step_index, 0);
            assert_eq!(first.position, Position::new(0, 0));
        }
        // Every episode's last record is the goal.
        for episode in 0..3 {
            let last = result
                .trajectory
                .iter()
                .filter(|r| r.episode_index == episode)
                .last()
                .unwrap();
            assert_eq!(last.position, grid.goal());
        }
    }

    #[test]
    fn test_step_counts_match_trajectory() {
        let grid = corridor();
        let config = TrainerConfig {
            num_episodes: 5,
            epsilon: 0.3,
            gamma: 0.99,
            max_steps: None,
            seed: Some(11),
        };
        let mut agent = QLearningAgent::new(&grid);
        let result = Trainer::new(config).unwrap().run(&mut agent, &grid).unwrap();

        assert_eq!(result.episode_lengths.len(), 5);
        assert_eq!(
            result.total_steps,
            result.episode_lengths.iter().sum::<usize>()
        );
        // One record per step plus the initial position of each episode.
        assert_eq!(result.trajectory.len(), result.total_steps + 5);
    }

    #[test]
    fn test_step_cap_bounds_episodes_on_unreachable_goal() {
        let grid = Grid::from_codes(&[vec![1, -1, 2]]).unwrap();
        assert!(!grid.goal_reachable());

        let config = TrainerConfig {
            num_episodes: 2,
            epsilon: 0.5,
            gamma: 0.99,
            max_steps: Some(25),
            seed: Some(3),
        };
        let mut agent = QLearningAgent::new(&grid);
        let result = Trainer::new(config).unwrap().run(&mut agent, &grid).unwrap();

        assert_eq!(result.reached_goal, 0);
        assert!(result.episode_lengths.iter().all(|&len| len == 25));
    }

    #[test]
    fn test_table_persists_across_episodes() {
        let grid = corridor();
        let config = TrainerConfig {
            num_episodes: 1,
            epsilon: 0.0,
            gamma: 0.99,
            max_steps: None,
            seed: Some(5),
        };
        let mut agent = QLearningAgent::new(&grid);
        Trainer::new(config.clone())
            .unwrap()
            .run(&mut agent, &grid)
            .unwrap();
        let after_one = agent.q_table().clone();

        // A second run continues learning from the same table.
        Trainer::new(config).unwrap().run(&mut agent, &grid).unwrap();
        assert_ne!(&after_one, agent.q_table());
    }
}
