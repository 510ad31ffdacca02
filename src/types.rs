//! Core domain types: positions, actions, and trajectory records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the maze grid, 0-indexed as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Apply an action's displacement to this position.
    ///
    /// Returns `None` when the displacement would move past the top or left
    /// edge of the coordinate space. Staying inside the grid's lower-right
    /// bounds is the grid's concern, not the position's.
    pub fn step(self, action: Action) -> Option<Position> {
        let (dr, dc) = action.delta();
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four unit moves available to the agent.
///
/// The declaration order is the fixed action ordering: each action's
/// [`Action::index`] is stable for the lifetime of a training run and is
/// used directly as the first axis of the Q-table. Ties in value queries
/// resolve to the lowest index, i.e. the earliest action listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Right,
    Down,
    Left,
    Up,
}

impl Action {
    /// The fixed, ordered action set.
    pub const ALL: [Action; 4] = [Action::Right, Action::Down, Action::Left, Action::Up];

    /// Number of actions in the fixed set.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable integer index of this action within [`Action::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Displacement as (row delta, col delta).
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Right => (0, 1),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Up => (-1, 0),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
            Action::Up => "up",
        };
        write!(f, "{name}")
    }
}

/// One visited position during training.
///
/// Field names are a wire contract with downstream persistence and plotting
/// tooling; they must stay stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    pub episode_index: usize,
    pub step_index: usize,
    pub position: Position,
}

impl TrajectoryRecord {
    /// Create a new trajectory record.
    pub const fn new(episode_index: usize, step_index: usize, position: Position) -> Self {
        TrajectoryRecord {
            episode_index,
            step_index,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_indices_follow_declaration_order() {
        assert_eq!(Action::Right.index(), 0);
        assert_eq!(Action::Down.index(), 1);
        assert_eq!(Action::Left.index(), 2);
        assert_eq!(Action::Up.index(), 3);
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_position_step() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.step(Action::Right), Some(Position::new(2, 4)));
        assert_eq!(pos.step(Action::Down), Some(Position::new(3, 3)));
        assert_eq!(pos.step(Action::Left), Some(Position::new(2, 2)));
        assert_eq!(pos.step(Action::Up), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_position_step_underflow() {
        assert_eq!(Position::new(0, 0).step(Action::Up), None);
        assert_eq!(Position::new(0, 0).step(Action::Left), None);
    }
}
