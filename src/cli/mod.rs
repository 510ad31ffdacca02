//! CLI infrastructure for the qmaze toolkit
//!
//! This module provides the command-line interface for generating mazes,
//! training agents, and evaluating learned policies.

pub mod commands;
