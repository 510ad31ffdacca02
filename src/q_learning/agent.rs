//! Q-learning agent: one temporal difference update per step

use crate::{
    maze::Grid,
    q_learning::{policy::EpsilonGreedy, q_table::QTable},
    reward::reward,
    types::{Action, Position},
};

/// Tabular Q-learning agent.
///
/// Owns the Q-table and the epsilon-greedy policy; hyperparameters
/// (epsilon, gamma) are supplied per step by the caller so that a single
/// configuration struct governs the whole run. The table persists across
/// episodes and is never reset mid-run.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    policy: EpsilonGreedy,
}

impl QLearningAgent {
    /// Create an agent with a zero-initialized table sized to `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            q_table: QTable::new(Action::COUNT, grid.rows(), grid.cols()),
            policy: EpsilonGreedy::new(),
        }
    }

    /// Seed the policy RNG for reproducible training.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.policy = EpsilonGreedy::with_seed(seed);
        self
    }

    /// Reseed the policy RNG in place.
    pub fn set_seed(&mut self, seed: u64) {
        self.policy.reseed(seed);
    }

    /// Rebuild an agent around a previously trained table.
    pub fn from_q_table(q_table: QTable) -> Self {
        Self {
            q_table,
            policy: EpsilonGreedy::new(),
        }
    }

    /// Read access to the learned table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Consume the agent, yielding the learned table.
    pub fn into_q_table(self) -> QTable {
        self.q_table
    }

    /// Execute one training step from `position`.
    ///
    /// Selects an action epsilon-greedily, computes the reward, applies the
    /// temporal difference update in place, and returns the new position.
    /// On an invalid move the agent stays put but still receives the
    /// penalty, and the update bootstraps from the unchanged position.
    ///
    /// The update deliberately applies the full delta each step (learning
    /// rate 1.0):
    ///
    /// ```text
    /// Q(s,a) += r + gamma * (max_a' Q(s',a') - Q(s,a))
    /// ```
    pub fn step(&mut self, position: Position, grid: &Grid, epsilon: f64, gamma: f64) -> Position {
        let action = self.policy.select(position, &self.q_table, epsilon);
        let r = reward(action, position, grid);

        let next = match position.step(action) {
            Some(candidate) if grid.is_open(candidate) => candidate,
            _ => position,
        };

        let action_index = action.index();
        let current = self.q_table.get(action_index, position);
        let delta = self.q_table.best_value(next) - current;
        self.q_table.set(action_index, position, current + r + gamma * delta);

        next
    }

    /// One greedy (epsilon = 0) move without learning.
    ///
    /// Used for policy rollouts after training. An invalid greedy move
    /// leaves the position unchanged.
    pub fn greedy_step(&self, position: Position, grid: &Grid) -> Position {
        let action = Action::ALL[self.q_table.best_action_index(position)];
        match position.step(action) {
            Some(candidate) if grid.is_open(candidate) => candidate,
            _ => position,
        }
    }

    /// Follow the greedy policy from the start cell until the goal, for at
    /// most `max_steps` moves.
    ///
    /// Returns the visited positions (including start and goal) when the
    /// goal is reached, or `None` if the rollout stalls or runs out of
    /// steps. A learned policy that cannot reach the goal commonly cycles,
    /// so the explicit bound is required here even though training itself
    /// has none.
    pub fn greedy_rollout(&self, grid: &Grid, max_steps: usize) -> Option<Vec<Position>> {
        let mut path = vec![grid.start()];
        let mut position = grid.start();

        for _ in 0..max_steps {
            if position == grid.goal() {
                return Some(path);
            }
            let next = self.greedy_step(position, grid);
            if next == position {
                // Greedy action bounced off a wall; the policy is stuck.
                return None;
            }
            position = next;
            path.push(position);
        }

        (position == grid.goal()).then_some(path)
    }
}
