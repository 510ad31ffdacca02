//! Data export for external persistence and plotting tooling
//!
//! Trajectories go out as CSV rows keyed by episode and step; grids go out
//! in the `{-1, 0, 1, 2}` wire encoding, one comma-separated row per grid
//! row. Both shapes are consumed by downstream visualization and must stay
//! stable.

pub mod trajectory_csv;

pub use trajectory_csv::{read_grid_csv, write_grid_csv, write_trajectories};
