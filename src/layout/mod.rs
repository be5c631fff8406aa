//! Wall layout module
//!
//! Turns a carved maze into the rectangles and circle an external 2D
//! physics engine consumes.

pub mod shapes;
pub mod walls;

pub use shapes::{BallSpawn, BodyTag, Goal, WallSegment};
pub use walls::{LayoutParams, WallLayout};
