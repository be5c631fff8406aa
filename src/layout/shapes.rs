//! Geometric primitives handed to the physics engine
//!
//! Coordinates are engine units with the origin at the top-left of the play
//! area and y growing downward. Rectangles are described by center and size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision category attached to every body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyTag {
    /// Interior maze wall; turns dynamic when the goal is reached
    Wall,
    /// Play-area border; always static
    Boundary,
    Goal,
    Ball,
}

impl BodyTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyTag::Wall => "wall",
            BodyTag::Boundary => "boundary",
            BodyTag::Goal => "goal",
            BodyTag::Ball => "ball",
        }
    }
}

/// A static wall rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub center: Vec2,
    pub size: Vec2,
    pub tag: BodyTag,
}

impl WallSegment {
    pub fn new(center: Vec2, size: Vec2, tag: BodyTag) -> Self {
        Self { center, size, tag }
    }
}

/// The goal rectangle in the bottom-right cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub center: Vec2,
    pub size: Vec2,
}

/// Where the ball starts and how big it is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpawn {
    pub center: Vec2,
    pub radius: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(BodyTag::Wall.as_str(), "wall");
        assert_eq!(BodyTag::Goal.as_str(), "goal");
        assert_eq!(BodyTag::Ball.as_str(), "ball");
        assert_eq!(serde_json::to_string(&BodyTag::Boundary).unwrap(), "\"boundary\"");
    }
}
