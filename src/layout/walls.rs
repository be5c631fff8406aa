//! Maze to wall geometry
//!
//! Every closed passage becomes one thin rectangle sitting on the shared
//! edge of its two cells. The play area gets four border walls, the goal
//! sits in the bottom-right cell and the ball spawns in the top-left one.
//! No randomness here: the same maze and parameters always give the same
//! geometry.

use glam::Vec2;
use serde::Serialize;

use super::shapes::{BallSpawn, BodyTag, Goal, WallSegment};
use crate::consts::*;
use crate::error::{MazeError, check_count, check_length};
use crate::maze::Maze;

/// Cell size, play-area size and wall thicknesses
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutParams {
    pub unit_width: f32,
    pub unit_height: f32,
    /// Play-area size as given; `None` means `cols x rows` whole cells
    pub viewport: Option<Vec2>,
    pub wall_thickness: f32,
    pub boundary_thickness: f32,
}

impl LayoutParams {
    /// Explicit cell size with default thicknesses
    pub fn new(unit_width: f32, unit_height: f32) -> Result<Self, MazeError> {
        check_length("unit_width", unit_width)?;
        check_length("unit_height", unit_height)?;
        Ok(Self {
            unit_width,
            unit_height,
            viewport: None,
            wall_thickness: WALL_THICKNESS,
            boundary_thickness: BOUNDARY_THICKNESS,
        })
    }

    /// Split a viewport evenly into `rows x cols` cells
    pub fn from_viewport(
        width: f32,
        height: f32,
        rows: usize,
        cols: usize,
    ) -> Result<Self, MazeError> {
        check_length("width", width)?;
        check_length("height", height)?;
        check_count("rows", rows)?;
        check_count("cols", cols)?;
        let mut params = Self::new(width / cols as f32, height / rows as f32)?;
        params.viewport = Some(Vec2::new(width, height));
        Ok(params)
    }

    /// Override wall and border thickness
    pub fn with_thickness(mut self, wall: f32, boundary: f32) -> Result<Self, MazeError> {
        check_length("wall_thickness", wall)?;
        check_length("boundary_thickness", boundary)?;
        self.wall_thickness = wall;
        self.boundary_thickness = boundary;
        Ok(self)
    }
}

/// Concrete obstacles, goal and spawn for one maze
#[derive(Debug, Clone, Serialize)]
pub struct WallLayout {
    width: f32,
    height: f32,
    params: LayoutParams,
    /// Borders first, then closed horizontals, then closed verticals
    walls: Vec<WallSegment>,
    goal: Goal,
    ball: BallSpawn,
    #[serde(skip)]
    maze: Maze,
}

impl WallLayout {
    /// Lay out `maze`, taking ownership of it
    pub fn build(maze: Maze, params: LayoutParams) -> Result<Self, MazeError> {
        check_length("unit_width", params.unit_width)?;
        check_length("unit_height", params.unit_height)?;
        check_length("wall_thickness", params.wall_thickness)?;
        check_length("boundary_thickness", params.boundary_thickness)?;

        let uw = params.unit_width;
        let uh = params.unit_height;
        let (width, height) = match params.viewport {
            Some(viewport) => {
                check_length("width", viewport.x)?;
                check_length("height", viewport.y)?;
                (viewport.x, viewport.y)
            }
            None => (maze.cols() as f32 * uw, maze.rows() as f32 * uh),
        };

        let mut walls = Vec::with_capacity(4 + maze.closed_passage_count());
        walls.extend(boundary_walls(width, height, params.boundary_thickness));

        for (row, col, &open) in maze.horizontals().iter() {
            if open {
                continue;
            }
            walls.push(WallSegment::new(
                Vec2::new(col as f32 * uw + uw / 2.0, row as f32 * uh + uh),
                Vec2::new(uw, params.wall_thickness),
                BodyTag::Wall,
            ));
        }

        for (row, col, &open) in maze.verticals().iter() {
            if open {
                continue;
            }
            walls.push(WallSegment::new(
                Vec2::new(col as f32 * uw + uw, row as f32 * uh + uh / 2.0),
                Vec2::new(params.wall_thickness, uh),
                BodyTag::Wall,
            ));
        }

        let goal = Goal {
            center: Vec2::new(width - uw / 2.0, height - uh / 2.0),
            size: Vec2::new(uw * GOAL_SCALE, uh * GOAL_SCALE),
        };
        let ball = BallSpawn {
            center: Vec2::new(uw / 2.0, uh / 2.0),
            radius: uw.min(uh) / BALL_RADIUS_DIVISOR,
        };

        log::debug!(
            "Layout {}x{}: {} walls ({} interior), cell {:.1}x{:.1}",
            width,
            height,
            walls.len(),
            walls.len() - 4,
            uw,
            uh
        );

        Ok(Self {
            width,
            height,
            params,
            walls,
            goal,
            ball,
            maze,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// All walls, borders included
    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    /// Walls tagged for unlocking on win
    pub fn interior_walls(&self) -> impl Iterator<Item = &WallSegment> + '_ {
        self.walls.iter().filter(|w| w.tag == BodyTag::Wall)
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn ball(&self) -> &BallSpawn {
        &self.ball
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// JSON for an external engine
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Top, bottom, left, right
fn boundary_walls(width: f32, height: f32, thickness: f32) -> [WallSegment; 4] {
    [
        WallSegment::new(
            Vec2::new(width / 2.0, 0.0),
            Vec2::new(width, thickness),
            BodyTag::Boundary,
        ),
        WallSegment::new(
            Vec2::new(width / 2.0, height),
            Vec2::new(width, thickness),
            BodyTag::Boundary,
        ),
        WallSegment::new(
            Vec2::new(0.0, height / 2.0),
            Vec2::new(thickness, height),
            BodyTag::Boundary,
        ),
        WallSegment::new(
            Vec2::new(width, height / 2.0),
            Vec2::new(thickness, height),
            BodyTag::Boundary,
        ),
    ]
}
