//! Maze Chase - steer a ball through a random maze to the goal
//!
//! Core modules:
//! - `maze`: Spanning-tree maze carving (randomized depth-first search)
//! - `layout`: Maze to wall/goal/ball geometry for a 2D physics engine
//! - `game`: Body bookkeeping and the Playing -> Won transition
//! - `settings`: Grid and viewport configuration

pub mod error;
pub mod game;
pub mod layout;
pub mod maze;
pub mod settings;

pub use error::MazeError;
pub use game::{GameEvent, GamePhase, GameState};
pub use layout::{LayoutParams, WallLayout};
pub use maze::{Maze, MazeGenerator};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default grid size
    pub const DEFAULT_ROWS: usize = 10;
    pub const DEFAULT_COLS: usize = 15;

    /// Default play-area size
    pub const DEFAULT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_HEIGHT: f32 = 720.0;

    /// Interior wall thickness
    pub const WALL_THICKNESS: f32 = 10.0;
    /// Play-area border thickness
    pub const BOUNDARY_THICKNESS: f32 = 5.0;

    /// Goal rectangle size relative to a cell
    pub const GOAL_SCALE: f32 = 0.7;
    /// Ball radius is min(cell width, cell height) / this
    pub const BALL_RADIUS_DIVISOR: f32 = 4.0;

    /// Velocity added per steering key press
    pub const STEER_IMPULSE: f32 = 5.0;
    /// Downward gravity switched on after the win
    pub const WIN_GRAVITY: f32 = 1.0;
}
