//! Fixed reward scheme for maze transitions

use crate::{maze::Grid, types::{Action, Position}};

/// Penalty for attempting a move that leaves the grid or lands on an
/// obstacle.
pub const INVALID_MOVE_PENALTY: f64 = -10.0;

/// Cost of every legal step; biases learning toward shorter paths.
pub const STEP_COST: f64 = -1.0;

/// Reward for taking `action` from `position` on `grid`.
///
/// Pure function of its inputs: the candidate destination is
/// `position + action`, and the reward is [`INVALID_MOVE_PENALTY`] when
/// that destination is out of bounds or an obstacle, [`STEP_COST`]
/// otherwise. Invalid moves are a normal penalized branch, not an error.
pub fn reward(action: Action, position: Position, grid: &Grid) -> f64 {
    match position.step(action) {
        Some(next) if grid.is_open(next) => STEP_COST,
        _ => INVALID_MOVE_PENALTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        // S . #
        // . . G
        Grid::from_codes(&[vec![1, 0, -1], vec![0, 0, 2]]).unwrap()
    }

    #[test]
    fn test_legal_moves_cost_one() {
        let grid = grid();
        assert_eq!(reward(Action::Right, Position::new(0, 0), &grid), STEP_COST);
        assert_eq!(reward(Action::Down, Position::new(0, 0), &grid), STEP_COST);
        assert_eq!(reward(Action::Right, Position::new(1, 1), &grid), STEP_COST);
    }

    #[test]
    fn test_out_of_bounds_is_penalized() {
        let grid = grid();
        assert_eq!(
            reward(Action::Up, Position::new(0, 0), &grid),
            INVALID_MOVE_PENALTY
        );
        assert_eq!(
            reward(Action::Left, Position::new(0, 0), &grid),
            INVALID_MOVE_PENALTY
        );
        assert_eq!(
            reward(Action::Down, Position::new(1, 2), &grid),
            INVALID_MOVE_PENALTY
        );
    }

    #[test]
    fn test_obstacle_is_penalized() {
        let grid = grid();
        assert_eq!(
            reward(Action::Right, Position::new(0, 1), &grid),
            INVALID_MOVE_PENALTY
        );
        assert_eq!(
            reward(Action::Up, Position::new(1, 2), &grid),
            INVALID_MOVE_PENALTY
        );
    }

    #[test]
    fn test_reward_covers_every_action_everywhere() {
        let grid = grid();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let pos = Position::new(row, col);
                for action in Action::ALL {
                    let expected = match pos.step(action) {
                        Some(next) if grid.is_open(next) => STEP_COST,
                        _ => INVALID_MOVE_PENALTY,
                    };
                    assert_eq!(reward(action, pos, &grid), expected);
                }
            }
        }
    }
}
