//! Epsilon-greedy action selection

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    q_learning::q_table::QTable,
    types::{Action, Position},
};

/// Epsilon-greedy policy over the fixed action set.
///
/// One uniform draw per selection decides between exploring (a uniformly
/// random action, independent of the table) and exploiting (the argmax
/// action, lowest index on ties). Exploitation is deterministic given the
/// table state; exploration draws are the policy's only source of
/// randomness.
///
/// Epsilon is supplied per call and held constant by the trainer for the
/// whole run; annealing schedules are an extension point, not built-in
/// behavior.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    rng: StdRng,
}

impl EpsilonGreedy {
    /// Create a policy seeded from the system RNG.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a policy with a fixed seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reseed the internal RNG.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Select the next action for `position`.
    pub fn select(&mut self, position: Position, q_table: &QTable, epsilon: f64) -> Action {
        if self.rng.random::<f64>() < epsilon {
            // Explore: uniform over the action set.
            Action::ALL[self.rng.random_range(0..Action::COUNT)]
        } else {
            // Exploit: best known action for this position.
            Action::ALL[q_table.best_action_index(position)]
        }
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new()
    }
}
