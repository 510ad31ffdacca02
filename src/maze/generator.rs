//! Randomized maze generation
//!
//! Mazes are carved with a randomized depth-first traversal over a
//! wall/passage checkerboard, which yields a spanning tree: every free cell
//! reachable, exactly one path between any two cells. A single path gives
//! the learner no real choices, so a loosening pass then opens each
//! remaining wall cell independently with a configurable probability,
//! introducing cycles and alternate routes. Loosening only ever adds open
//! cells, so the carved start-to-goal path survives it.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    error::Result,
    maze::grid::{Cell, Grid},
    Error,
};

/// Two-step neighbor offsets used by the carve (N/S/E/W over the
/// checkerboard), with the wall cell sitting at the midpoint.
const CARVE_DIRECTIONS: [(isize, isize); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// Procedural maze generator.
///
/// Owns its RNG so that a seeded generator reproduces the same maze for the
/// same inputs.
#[derive(Debug)]
pub struct MazeGenerator {
    rng: StdRng,
}

impl MazeGenerator {
    /// Create a generator seeded from the system RNG.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a generator with a fixed seed for reproducible mazes.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a maze of roughly the requested dimensions.
    ///
    /// Even dimensions are rounded up to odd to preserve the wall/passage
    /// checkerboard. The start is placed at (1, 1) and the goal at
    /// (height-2, width-2). After carving, each remaining wall cell is
    /// converted to a free cell with probability `loosen_fraction`.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` or `width` is zero, or if
    /// `loosen_fraction` is outside [0, 1] or not finite.
    pub fn generate(
        &mut self,
        height: usize,
        width: usize,
        loosen_fraction: f64,
    ) -> Result<Grid> {
        if height == 0 {
            return Err(Error::InvalidDimension {
                name: "height",
                value: height,
            });
        }
        if width == 0 {
            return Err(Error::InvalidDimension {
                name: "width",
                value: width,
            });
        }
        if !(0.0..=1.0).contains(&loosen_fraction) {
            return Err(Error::FractionOutOfRange {
                name: "loosen_fraction",
                value: loosen_fraction,
            });
        }

        let height = round_up_to_odd(height).max(3);
        let mut width = round_up_to_odd(width).max(3);
        // A 3x3 interior is a single cell, which would collapse the start
        // onto the goal. Widen so the two markers stay distinct.
        if height == 3 && width == 3 {
            width = 5;
        }

        let mut cells = vec![Cell::Obstacle; height * width];
        self.carve(&mut cells, height, width);

        cells[width + 1] = Cell::Start;
        cells[(height - 2) * width + (width - 2)] = Cell::Goal;

        // Loosening pass: open residual walls to create alternate routes.
        for cell in &mut cells {
            if *cell == Cell::Obstacle && self.rng.random::<f64>() < loosen_fraction {
                *cell = Cell::Free;
            }
        }

        Grid::from_cells(height, width, cells)
    }

    /// Randomized depth-first carve from (1, 1) using an explicit stack.
    ///
    /// The recursion depth of the textbook formulation is bounded by the
    /// number of free cells, which overflows the call stack for large
    /// mazes; the explicit stack removes that limit.
    fn carve(&mut self, cells: &mut [Cell], height: usize, width: usize) {
        let mut stack: Vec<(usize, usize)> = vec![(1, 1)];
        cells[width + 1] = Cell::Free;

        while let Some(&(row, col)) = stack.last() {
            let mut candidates: Vec<(usize, usize)> = Vec::with_capacity(4);
            for (dr, dc) in CARVE_DIRECTIONS {
                let Some(nr) = row.checked_add_signed(dr) else {
                    continue;
                };
                let Some(nc) = col.checked_add_signed(dc) else {
                    continue;
                };
                // Stay within the interior so the outer wall ring survives.
                if nr == 0 || nr >= height - 1 || nc == 0 || nc >= width - 1 {
                    continue;
                }
                if cells[nr * width + nc] == Cell::Obstacle {
                    candidates.push((nr, nc));
                }
            }

            match candidates.choose(&mut self.rng) {
                Some(&(nr, nc)) => {
                    // Clear the wall at the midpoint, then step into the
                    // neighbor.
                    let wall = ((row + nr) / 2) * width + (col + nc) / 2;
                    cells[wall] = Cell::Free;
                    cells[nr * width + nc] = Cell::Free;
                    stack.push((nr, nc));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn round_up_to_odd(value: usize) -> usize {
    if value.is_multiple_of(2) { value + 1 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut generator = MazeGenerator::with_seed(1);
        assert!(matches!(
            generator.generate(0, 9, 0.0),
            Err(Error::InvalidDimension { name: "height", .. })
        ));
        assert!(matches!(
            generator.generate(9, 0, 0.0),
            Err(Error::InvalidDimension { name: "width", .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_loosen_fraction() {
        let mut generator = MazeGenerator::with_seed(1);
        assert!(matches!(
            generator.generate(9, 9, 1.5),
            Err(Error::FractionOutOfRange { .. })
        ));
        assert!(matches!(
            generator.generate(9, 9, -0.1),
            Err(Error::FractionOutOfRange { .. })
        ));
        assert!(matches!(
            generator.generate(9, 9, f64::NAN),
            Err(Error::FractionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_even_dimensions_round_up_to_odd() {
        let grid = MazeGenerator::with_seed(3).generate(8, 12, 0.0).unwrap();
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.cols(), 13);
    }

    #[test]
    fn test_markers_at_expected_corners() {
        let grid = MazeGenerator::with_seed(5).generate(11, 11, 0.2).unwrap();
        assert_eq!(grid.start(), Position::new(1, 1));
        assert_eq!(grid.goal(), Position::new(9, 9));
    }

    #[test]
    fn test_carved_maze_is_solvable_without_loosening() {
        for seed in 0..20 {
            let grid = MazeGenerator::with_seed(seed).generate(15, 15, 0.0).unwrap();
            assert!(grid.goal_reachable(), "seed {seed} produced unsolvable maze");
        }
    }

    #[test]
    fn test_full_loosening_opens_entire_interior() {
        let grid = MazeGenerator::with_seed(9).generate(9, 9, 1.0).unwrap();
        // With loosen_fraction = 1.0 every wall cell is converted, so the
        // whole grid is open.
        assert_eq!(grid.open_cell_count(), grid.rows() * grid.cols());
    }

    #[test]
    fn test_degenerate_dimensions_produce_valid_grid() {
        for (h, w) in [(1, 1), (2, 2), (1, 9), (9, 2)] {
            let grid = MazeGenerator::with_seed(2).generate(h, w, 0.5).unwrap();
            assert!(grid.goal_reachable());
            assert_ne!(grid.start(), grid.goal());
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = MazeGenerator::with_seed(42).generate(13, 13, 0.3).unwrap();
        let b = MazeGenerator::with_seed(42).generate(13, 13, 0.3).unwrap();
        assert_eq!(a, b);
    }
}
