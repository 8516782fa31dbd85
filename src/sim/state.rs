//! World state and core simulation types
//!
//! Everything the simulation mutates is owned by a single `World`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorPhysics};
use super::cloud::Cloud;
use super::obstacle::{Obstacle, ObstacleKind};
use crate::consts::*;
use crate::highscores::HighScore;
use crate::tuning::Tuning;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start input
    Idle,
    /// Simulation advancing
    Running,
    /// Run ended, simulation frozen until restart
    GameOver,
}

/// Things that happened during a tick, drained by the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Restarted,
    ObstacleSpawned(ObstacleKind),
    SpeedUp { speed: f32 },
    GameOver {
        score: u64,
        high_score: u64,
        /// True when this run beat the stored high score
        new_high_score: bool,
    },
}

/// Playfield dimensions, capped at the maximum field size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.min(MAX_FIELD_WIDTH),
            height: height.min(MAX_FIELD_HEIGHT),
        }
    }

    /// Y-coordinate of the walkable surface
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_OFFSET
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(MAX_FIELD_WIDTH, MAX_FIELD_HEIGHT)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub actor: Actor,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live clouds in spawn order
    pub clouds: Vec<Cloud>,
    /// Scroll speed (pixels/tick), the difficulty knob
    pub speed: f32,
    pub score: u64,
    /// Best score so far; survives resets
    pub high_score: HighScore,
    /// Frames simulated since the last reset
    pub frame: u64,
    /// Running ticks counted toward the next score point
    pub score_ticks: u64,
    /// Ground track scroll offset (0 down to -TRACK_WIDTH)
    pub background_x: f32,
    events: Vec<GameEvent>,
}

impl World {
    /// Create an idle world
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport, high_score: HighScore) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            actor: Actor::new(viewport.ground_y()),
            speed: tuning.initial_speed,
            tuning,
            viewport,
            phase: GamePhase::Idle,
            obstacles: Vec::new(),
            clouds: Vec::new(),
            score: 0,
            high_score,
            frame: 0,
            score_ticks: 0,
            background_x: 0.0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.viewport.ground_y()
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn actor_physics(&self) -> ActorPhysics {
        ActorPhysics {
            jump_impulse: self.tuning.jump_impulse,
            gravity: self.tuning.gravity,
            run_frame_ticks: self.tuning.run_frame_ticks,
        }
    }

    /// Apply a new viewport size; the ground line follows the height
    ///
    /// The actor and live obstacles shift with the ground so ground hazards
    /// keep resting on it and aerial ones keep their altitude above it.
    /// Clouds are backdrop and stay put.
    pub fn resize(&mut self, width: f32, height: f32) {
        let old_ground = self.ground_y();
        self.viewport = Viewport::new(width, height);
        let dy = self.ground_y() - old_ground;
        if dy != 0.0 {
            self.actor.pos.y += dy;
            for obstacle in &mut self.obstacles {
                obstacle.pos.y += dy;
            }
        }
        log::debug!(
            "Viewport {}x{}, ground at {}",
            self.viewport.width,
            self.viewport.height,
            self.ground_y()
        );
    }

    /// Idle -> Running
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.phase = GamePhase::Running;
        self.push_event(GameEvent::Started);
        log::info!("Run started (seed {})", self.seed);
    }

    /// Full reset into Running; the high score is kept
    pub fn reset(&mut self) {
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.obstacles.clear();
        self.clouds.clear();
        self.frame = 0;
        self.score_ticks = 0;
        self.background_x = 0.0;
        self.actor = Actor::new(self.ground_y());
        self.phase = GamePhase::Running;
        self.push_event(GameEvent::Restarted);
        log::info!("Run restarted");
    }

    /// Running -> GameOver
    ///
    /// Freezes the scroll, kills the actor and settles the high score. Only
    /// the first call per run has any effect.
    pub fn game_over(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.speed = 0.0;
        self.actor.kill();

        let new_high_score = self.high_score.submit(self.score);
        self.push_event(GameEvent::GameOver {
            score: self.score,
            high_score: self.high_score.best,
            new_high_score,
        });
        log::info!(
            "Game over at score {} (best {}{})",
            self.score,
            self.high_score.best,
            if new_high_score { ", new record" } else { "" }
        );
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::Locomotion;

    fn world() -> World {
        World::new(42, Tuning::default(), Viewport::default(), HighScore::new(100))
    }

    #[test]
    fn test_viewport_capped() {
        let vp = Viewport::new(1920.0, 1080.0);
        assert_eq!(vp.width, MAX_FIELD_WIDTH);
        assert_eq!(vp.height, MAX_FIELD_HEIGHT);
        assert_eq!(vp.ground_y(), 380.0);

        let small = Viewport::new(640.0, 300.0);
        assert_eq!(small.width, 640.0);
        assert_eq!(small.ground_y(), 280.0);
    }

    #[test]
    fn test_new_world_is_idle() {
        let w = world();
        assert_eq!(w.phase, GamePhase::Idle);
        assert_eq!(w.speed, 5.0);
        assert_eq!(w.actor.feet(), w.ground_y());
    }

    #[test]
    fn test_game_over_only_from_running() {
        let mut w = world();
        w.game_over();
        assert_eq!(w.phase, GamePhase::Idle);

        w.start();
        w.score = 150;
        w.game_over();
        assert_eq!(w.phase, GamePhase::GameOver);
        assert_eq!(w.speed, 0.0);
        assert_eq!(w.actor.state, Locomotion::Dead);
        assert_eq!(w.high_score.best, 150);

        // Second call is a no-op
        w.game_over();
        let overs = w
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
    }

    #[test]
    fn test_reset_clears_run_but_keeps_high_score() {
        let mut w = world();
        w.start();
        w.score = 300;
        w.frame = 1500;
        w.score_ticks = 1500;
        w.speed = 6.0;
        w.obstacles.push(Obstacle::new(
            ObstacleKind::GroundSmall { variant: 0 },
            700.0,
            w.ground_y(),
            w.viewport.height,
        ));
        w.clouds.push(Cloud::new(Vec2::new(500.0, 80.0), 2.5));
        w.game_over();

        w.reset();
        assert_eq!(w.phase, GamePhase::Running);
        assert_eq!(w.score, 0);
        assert_eq!(w.speed, 5.0);
        assert_eq!(w.frame, 0);
        assert_eq!(w.score_ticks, 0);
        assert!(w.obstacles.is_empty());
        assert!(w.clouds.is_empty());
        assert_eq!(w.actor.state, Locomotion::Running);
        assert_eq!(w.high_score.best, 300);
    }

    #[test]
    fn test_resize_keeps_idle_actor_on_ground() {
        let mut w = world();
        w.resize(800.0, 300.0);
        assert_eq!(w.ground_y(), 280.0);
        assert_eq!(w.actor.feet(), 280.0);

        w.resize(1024.0, 768.0);
        assert_eq!(w.actor.feet(), 380.0);
    }

    #[test]
    fn test_resize_moves_obstacles_with_ground() {
        let mut w = world();
        w.start();
        let height = w.viewport.height;
        w.obstacles.push(Obstacle::new(
            ObstacleKind::GroundLarge { variant: 0 },
            200.0,
            w.ground_y(),
            height,
        ));
        w.obstacles.push(Obstacle::new(
            ObstacleKind::Aerial { band: 1 },
            400.0,
            w.ground_y(),
            height,
        ));

        w.resize(800.0, 300.0);
        let ground = &w.obstacles[0];
        assert_eq!(ground.pos.y + ground.size.y, w.ground_y());
        assert_eq!(ground.pos.x, 200.0);
        let aerial = &w.obstacles[1];
        assert_eq!(aerial.pos.y, w.viewport.height - AERIAL_ALTITUDES[1]);
    }

    #[test]
    fn test_resize_mid_jump_keeps_height_above_ground() {
        let mut w = world();
        w.start();
        w.actor.pos.y -= 60.0;
        w.actor.airborne = true;
        let above = w.ground_y() - w.actor.feet();

        w.resize(800.0, 250.0);
        assert_eq!(w.ground_y() - w.actor.feet(), above);
    }
}
