//! Serialization support for trained agents.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{maze::Grid, q_learning::{QLearningAgent, QTable}};

/// Metadata captured alongside a saved agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingMetadata {
    pub episodes_trained: Option<usize>,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub seed: Option<u64>,
}

/// Versioned on-disk representation of a trained agent (MessagePack).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAgent {
    pub version: u32,
    q_table: QTable,
    pub epsilon: f64,
    pub gamma: f64,
    pub metadata: TrainingMetadata,
}

impl SavedAgent {
    pub const VERSION: u32 = 1;

    /// Capture an agent together with the hyperparameters it was trained
    /// with.
    pub fn from_agent(
        agent: &QLearningAgent,
        epsilon: f64,
        gamma: f64,
        metadata: TrainingMetadata,
    ) -> Self {
        Self {
            version: Self::VERSION,
            q_table: agent.q_table().clone(),
            epsilon,
            gamma,
            metadata,
        }
    }

    /// Restore a usable agent from the saved table.
    pub fn to_agent(&self) -> Result<QLearningAgent> {
        if self.version != Self::VERSION {
            return Err(anyhow!(
                "Unsupported agent save format version: {}. Expected {}",
                self.version,
                Self::VERSION
            ));
        }
        Ok(QLearningAgent::from_q_table(self.q_table.clone()))
    }

    /// Verify that the saved table matches a grid's dimensions.
    pub fn check_grid(&self, grid: &Grid) -> crate::Result<()> {
        let (_, rows, cols) = self.q_table.shape();
        if rows != grid.rows() || cols != grid.cols() {
            return Err(crate::Error::GridShapeMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, self).context("Failed to serialize agent")?;

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        rmp_serde::decode::from_read(reader).context("Failed to deserialize agent")
    }
}
