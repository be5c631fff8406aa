//! Game state and win handling
//!
//! The physics engine reports collision-start pairs; the only pair that
//! matters is the ball touching the goal. That flips the game to `Won`,
//! turns gravity on and releases every interior wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::{BodyId, World};
use crate::consts::*;
use crate::error::MazeError;
use crate::layout::{BodyTag, WallLayout};
use crate::maze::{Direction, MazeGenerator};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball is loose in the maze
    Playing,
    /// Goal reached; walls are collapsing
    Won,
}

/// Notable transitions reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Won,
}

/// Two bodies that started touching, in whatever order the engine reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionPair {
    pub a: BodyId,
    pub b: BodyId,
}

impl CollisionPair {
    pub fn new(a: BodyId, b: BodyId) -> Self {
        Self { a, b }
    }
}

/// True when the tags are exactly {goal, ball}
pub fn is_goal_ball(a: BodyTag, b: BodyTag) -> bool {
    matches!(
        (a, b),
        (BodyTag::Goal, BodyTag::Ball) | (BodyTag::Ball, BodyTag::Goal)
    )
}

/// A running game
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the maze was carved from
    pub seed: u64,
    pub phase: GamePhase,
    pub world: World,
    pub layout: WallLayout,
    ball: Option<BodyId>,
}

impl GameState {
    /// Carve, lay out and populate a world from settings
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, MazeError> {
        settings.validate()?;
        let maze = MazeGenerator::new(settings.rows, settings.cols)?.generate_seeded(seed)?;
        let layout = WallLayout::build(maze, settings.layout_params()?)?;
        Ok(Self::from_layout(layout, seed))
    }

    /// Start playing on an existing layout
    pub fn from_layout(layout: WallLayout, seed: u64) -> Self {
        let world = World::from_layout(&layout);
        let ball = world.find(BodyTag::Ball);
        Self {
            seed,
            phase: GamePhase::Playing,
            world,
            layout,
            ball,
        }
    }

    pub fn ball(&self) -> Option<BodyId> {
        self.ball
    }

    /// Process one batch of collision-start pairs
    ///
    /// Returns `Some(GameEvent::Won)` on the single Playing -> Won
    /// transition. Pairs naming unknown bodies are skipped, and everything
    /// after the win is ignored.
    pub fn handle_collision_start(&mut self, pairs: &[CollisionPair]) -> Option<GameEvent> {
        if self.phase == GamePhase::Won {
            return None;
        }

        let reached = pairs.iter().any(|pair| {
            match (self.world.tag_of(pair.a), self.world.tag_of(pair.b)) {
                (Some(a), Some(b)) => is_goal_ball(a, b),
                _ => false,
            }
        });
        if !reached {
            return None;
        }

        self.win();
        Some(GameEvent::Won)
    }

    fn win(&mut self) {
        self.phase = GamePhase::Won;
        self.world.gravity = Vec2::new(0.0, WIN_GRAVITY);

        let walls: Vec<BodyId> = self
            .world
            .tagged(BodyTag::Wall)
            .map(|body| body.id)
            .collect();
        for &id in &walls {
            self.world.set_static(id, false);
        }

        log::info!(
            "Goal reached, releasing {} '{}' bodies",
            walls.len(),
            BodyTag::Wall.as_str()
        );
    }

    /// Nudge the ball's velocity one step toward `dir` (screen y is down)
    pub fn steer(&mut self, dir: Direction) {
        let Some(ball) = self.ball.and_then(|id| self.world.body_mut(id)) else {
            return;
        };
        let (dy, dx) = dir.delta();
        ball.vel += Vec2::new(dx as f32, dy as f32) * STEER_IMPULSE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_game() -> GameState {
        let settings = Settings {
            rows: 3,
            cols: 4,
            width: 400.0,
            height: 300.0,
            ..Default::default()
        };
        GameState::new(&settings, 12345).unwrap()
    }

    fn ids(state: &GameState) -> (BodyId, BodyId, BodyId) {
        let world = &state.world;
        (
            world.find(BodyTag::Ball).unwrap(),
            world.find(BodyTag::Goal).unwrap(),
            world.find(BodyTag::Wall).unwrap(),
        )
    }

    #[test]
    fn test_starts_playing() {
        let state = small_game();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.world.gravity, Vec2::ZERO);
        assert!(state.ball().is_some());
    }

    #[test]
    fn test_goal_ball_matching() {
        assert!(is_goal_ball(BodyTag::Goal, BodyTag::Ball));
        assert!(is_goal_ball(BodyTag::Ball, BodyTag::Goal));
        assert!(!is_goal_ball(BodyTag::Wall, BodyTag::Ball));
        assert!(!is_goal_ball(BodyTag::Ball, BodyTag::Ball));
        assert!(!is_goal_ball(BodyTag::Goal, BodyTag::Goal));
        assert!(!is_goal_ball(BodyTag::Boundary, BodyTag::Goal));
    }

    #[test]
    fn test_wall_ball_never_wins() {
        let mut state = small_game();
        let (ball, _, wall) = ids(&state);
        let event = state.handle_collision_start(&[
            CollisionPair::new(wall, ball),
            CollisionPair::new(ball, wall),
        ]);
        assert_eq!(event, None);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_win_either_order_exactly_once() {
        for reversed in [false, true] {
            let mut state = small_game();
            let (ball, goal, _) = ids(&state);
            let pair = if reversed {
                CollisionPair::new(goal, ball)
            } else {
                CollisionPair::new(ball, goal)
            };

            assert_eq!(state.handle_collision_start(&[pair]), Some(GameEvent::Won));
            assert_eq!(state.phase, GamePhase::Won);
            assert_eq!(state.handle_collision_start(&[pair]), None);
            assert_eq!(state.handle_collision_start(&[pair, pair]), None);
        }
    }

    #[test]
    fn test_win_releases_walls_only() {
        let mut state = small_game();
        let (ball, goal, _) = ids(&state);
        state.handle_collision_start(&[CollisionPair::new(ball, goal)]);

        assert_eq!(state.world.gravity, Vec2::new(0.0, WIN_GRAVITY));
        for body in state.world.bodies() {
            match body.tag {
                BodyTag::Wall | BodyTag::Ball => assert!(!body.is_static),
                BodyTag::Boundary | BodyTag::Goal => assert!(body.is_static),
            }
        }
    }

    #[test]
    fn test_unknown_bodies_ignored() {
        let mut state = small_game();
        let (ball, _, _) = ids(&state);
        let event = state.handle_collision_start(&[CollisionPair::new(ball, BodyId(9999))]);
        assert_eq!(event, None);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_steer() {
        let mut state = small_game();
        let ball = state.ball().unwrap();

        state.steer(Direction::Up);
        state.steer(Direction::Right);
        state.steer(Direction::Right);
        let vel = state.world.body(ball).map(|b| b.vel).unwrap();
        assert_eq!(vel, Vec2::new(2.0 * STEER_IMPULSE, -STEER_IMPULSE));

        state.steer(Direction::Down);
        state.steer(Direction::Left);
        let vel = state.world.body(ball).map(|b| b.vel).unwrap();
        assert_eq!(vel, Vec2::new(STEER_IMPULSE, 0.0));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = small_game();
        let b = small_game();
        assert_eq!(a.layout.to_json().unwrap(), b.layout.to_json().unwrap());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(&settings, 1),
            Err(MazeError::InvalidDimensions { field: "rows", .. })
        ));
    }
}
