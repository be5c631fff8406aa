//! Addressable bodies for the physics engine
//!
//! The engine owns simulation; this is the bookkeeping it needs from us.
//! Each body keeps an explicit static flag so walls can be released one by
//! one after the win, without looking them up by label.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::layout::{BodyTag, WallLayout};

/// Stable body handle, allocated in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Collision shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect { size: Vec2 },
    Circle { radius: f32 },
}

/// One rigid body
#[derive(Debug, Clone, Serialize)]
pub struct Body {
    pub id: BodyId,
    pub tag: BodyTag,
    pub pos: Vec2,
    pub vel: Vec2,
    pub shape: Shape,
    pub is_static: bool,
}

/// All bodies plus global gravity
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// Sorted by id
    bodies: Vec<Body>,
    pub gravity: Vec2,
    next_id: u32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: Vec2::ZERO,
            next_id: 1,
        }
    }
}

impl World {
    /// Walls, then the goal, then the ball
    pub fn from_layout(layout: &WallLayout) -> Self {
        let mut world = Self::default();
        for wall in layout.walls() {
            world.add(
                wall.tag,
                wall.center,
                Shape::Rect { size: wall.size },
                true,
            );
        }
        let goal = layout.goal();
        world.add(
            BodyTag::Goal,
            goal.center,
            Shape::Rect { size: goal.size },
            true,
        );
        let ball = layout.ball();
        world.add(
            BodyTag::Ball,
            ball.center,
            Shape::Circle {
                radius: ball.radius,
            },
            false,
        );
        world
    }

    /// Allocate a new body ID
    fn next_body_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add(&mut self, tag: BodyTag, pos: Vec2, shape: Shape, is_static: bool) -> BodyId {
        let id = self.next_body_id();
        self.bodies.push(Body {
            id,
            tag,
            pos,
            vel: Vec2::ZERO,
            shape,
            is_static,
        });
        id
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|i| &self.bodies[i])
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(move |i| &mut self.bodies[i])
    }

    pub fn tag_of(&self, id: BodyId) -> Option<BodyTag> {
        self.body(id).map(|b| b.tag)
    }

    /// First body carrying `tag`
    pub fn find(&self, tag: BodyTag) -> Option<BodyId> {
        self.bodies.iter().find(|b| b.tag == tag).map(|b| b.id)
    }

    pub fn tagged(&self, tag: BodyTag) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(move |b| b.tag == tag)
    }

    /// Returns false when the body does not exist
    pub fn set_static(&mut self, id: BodyId, is_static: bool) -> bool {
        match self.body_mut(id) {
            Some(body) => {
                body.is_static = is_static;
                true
            }
            None => false,
        }
    }
}
