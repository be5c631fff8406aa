//! Maze generation module
//!
//! Pure and deterministic given its random source:
//! - Grids are sized once and never resized
//! - All randomness flows through `RandomSource`
//! - No geometry, physics or rendering dependencies

pub mod generate;
pub mod grid;
pub mod rng;

pub use generate::{Maze, MazeGenerator};
pub use grid::{Cell, Direction, Grid};
pub use rng::{RandomSource, ScriptedSource, random_seed, seeded, shuffle};
