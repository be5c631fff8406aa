//! Game-side contract around the layout
//!
//! Body bookkeeping, the Playing -> Won state machine and keyboard nudges.
//! Simulation itself belongs to the external physics engine.

pub mod state;
pub mod world;

pub use state::{CollisionPair, GameEvent, GamePhase, GameState, is_goal_ball};
pub use world::{Body, BodyId, Shape, World};
