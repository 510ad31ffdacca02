//! Maze representation and procedural generation
//!
//! The maze is a rectangular grid of cells (free, obstacle, start, goal).
//! [`Grid`] is the immutable model consumed by the learning loop;
//! [`MazeGenerator`] produces grids via randomized depth-first carving
//! followed by a stochastic loosening pass that opens extra routes.

pub mod generator;
pub mod grid;

pub use generator::MazeGenerator;
pub use grid::{Cell, Grid};
